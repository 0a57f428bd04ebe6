//! Dual-precision harness.
//!
//! Renders the same depth buffer once in `f64` and once in `f32` and hands
//! each buffer to an [`ImageSink`]. The two passes share no mutable state.

use crate::divergence::{tally, DivergenceReport};
use crate::generator::generate_pixels;
use crate::precision::{Precision, RenderParams};
use logdepth_core::{DepthBuffer, PixelBuffer, ProbeConfig};
use std::time::Instant;

/// Receives finished RGBA8 buffers (4 channels, row-major).
pub trait ImageSink {
    type Error;

    fn write_image(&mut self, precision: Precision, pixels: &PixelBuffer) -> Result<(), Self::Error>;
}

/// Both renders and how they compare.
#[derive(Debug, Clone)]
pub struct DualPrecisionOutput {
    pub double: PixelBuffer,
    pub single: PixelBuffer,
    pub report: DivergenceReport,
}

/// Render `depth` in one precision mode.
pub fn render_with_precision(
    depth: &DepthBuffer,
    config: &ProbeConfig,
    precision: Precision,
) -> PixelBuffer {
    let start = Instant::now();
    let pixels = match precision {
        Precision::Double => generate_pixels(depth, &RenderParams::<f64>::from_config(config)),
        Precision::Single => generate_pixels(depth, &RenderParams::<f32>::from_config(config)),
    };
    log::info!(
        "{} pass finished in {:.1}ms",
        precision,
        start.elapsed().as_secs_f64() * 1000.0
    );
    pixels
}

/// Run both passes, writing each buffer to `sink` as soon as it is ready.
///
/// Image dimensions come from `depth`; the `width`/`height` fields of
/// `config` are only used to load the samples.
pub fn run_dual_precision<S: ImageSink>(
    depth: &DepthBuffer,
    config: &ProbeConfig,
    sink: &mut S,
) -> Result<DualPrecisionOutput, S::Error> {
    let double = render_with_precision(depth, config, Precision::Double);
    sink.write_image(Precision::Double, &double)?;

    let single = render_with_precision(depth, config, Precision::Single);
    sink.write_image(Precision::Single, &single)?;

    let report = tally(&double, &single);
    log::info!(
        "precision divergence: {} of {} pixels differ ({:.2}%, {} sentinel mismatches, max delta {}, mean delta {:.4})",
        report.differing_pixels,
        report.pixel_count,
        report.differing_fraction() * 100.0,
        report.sentinel_mismatches,
        report.max_channel_delta,
        report.mean_channel_delta
    );

    Ok(DualPrecisionOutput {
        double,
        single,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Default)]
    struct RecordingSink {
        written: Vec<(Precision, PixelBuffer)>,
    }

    impl ImageSink for RecordingSink {
        type Error = Infallible;

        fn write_image(&mut self, precision: Precision, pixels: &PixelBuffer) -> Result<(), Infallible> {
            self.written.push((precision, pixels.clone()));
            Ok(())
        }
    }

    struct FailingSink;

    impl ImageSink for FailingSink {
        type Error = String;

        fn write_image(&mut self, precision: Precision, _: &PixelBuffer) -> Result<(), String> {
            Err(format!("cannot write {precision}"))
        }
    }

    fn small_config() -> ProbeConfig {
        ProbeConfig {
            width: 4,
            height: 3,
            ..ProbeConfig::reference()
        }
    }

    #[test]
    fn test_sink_receives_double_then_single() {
        let depth = DepthBuffer::filled(0.5, 4, 3).unwrap();
        let mut sink = RecordingSink::default();
        let output = run_dual_precision(&depth, &small_config(), &mut sink).unwrap();

        let order: Vec<Precision> = sink.written.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![Precision::Double, Precision::Single]);
        assert_eq!(sink.written[0].1, output.double);
        assert_eq!(sink.written[1].1, output.single);
    }

    #[test]
    fn test_sink_error_stops_the_run() {
        let depth = DepthBuffer::filled(0.5, 4, 3).unwrap();
        let err = run_dual_precision(&depth, &small_config(), &mut FailingSink).unwrap_err();
        assert_eq!(err, "cannot write double");
    }

    #[test]
    fn test_far_plane_input_is_all_sentinels_in_both_modes() {
        let depth = DepthBuffer::filled(1.0, 2, 2).unwrap();
        let mut sink = RecordingSink::default();
        let output = run_dual_precision(&depth, &small_config(), &mut sink).unwrap();
        assert_eq!(output.double.sentinel_count(), 4);
        assert_eq!(output.single.sentinel_count(), 4);
        assert!(output.report.is_identical());
    }
}
