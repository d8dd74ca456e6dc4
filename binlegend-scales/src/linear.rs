#[derive(Clone, Debug)]
pub struct LinearScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
}

impl Default for LinearScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
///
/// The mapping is computed in normalized form so the domain endpoints land
/// exactly on the range endpoints. Legend segments rely on this to tile the
/// bar without gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
}

impl LinearScale {
    pub fn new(config: &LinearScaleConfig) -> Self {
        Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
        }
    }

    pub fn with_domain(mut self, domain: (f32, f32)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f32, f32)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Widens the domain by `(end - start) * percent` on both sides
    pub fn with_extension(mut self, percent: f32) -> Self {
        if percent == 0.0 {
            return self;
        }
        let extension = (self.domain_end - self.domain_start) * percent;
        self.domain_start -= extension;
        self.domain_end += extension;
        self
    }

    pub fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn is_degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }

    /// Maps a single domain value into the range
    pub fn scale_value(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.range_start;
        }

        let mut t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        if t == 1.0 {
            // Avoid rounding drift on the far edge
            return self.range_end;
        }
        self.range_start + t * (self.range_end - self.range_start)
    }

    pub fn scale(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale_value(*v)).collect()
    }

    /// Maps a single range value back into the domain
    pub fn invert_value(&self, value: f32) -> f32 {
        if self.range_start == self.range_end || self.is_degenerate() {
            return self.domain_start;
        }

        let mut t = (value - self.range_start) / (self.range_end - self.range_start);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        self.domain_start + t * (self.domain_end - self.domain_start)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(&LinearScaleConfig::default())
    }
}
