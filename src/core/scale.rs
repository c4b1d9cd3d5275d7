use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Linear mapping between a domain interval and horizontal plot pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    start: f64,
    end: f64,
}

impl LinearScale {
    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Maps a domain value onto `[0, viewport.width]`.
    pub fn to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        let width = plot_width(viewport)?;
        finite_guard(value, "value")?;
        Ok((value - self.start) / self.span() * width)
    }

    /// Inverse of [`LinearScale::to_pixel`].
    pub fn to_domain(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        let width = plot_width(viewport)?;
        finite_guard(pixel, "pixel")?;
        Ok((pixel / width).mul_add(self.span(), self.start))
    }
}

fn plot_width(viewport: Viewport) -> ChartResult<f64> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(f64::from(viewport.width))
}

fn finite_guard(value: f64, what: &str) -> ChartResult<()> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{what} must be finite")));
    }
    Ok(())
}
