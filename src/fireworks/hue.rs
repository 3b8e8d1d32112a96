/// The show-wide hue, in degrees, always in `[0, 360)`.
///
/// Bursts take their base color from it and then push it forward; the
/// per-step drift moves it slowly between bursts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueCursor(f32);

impl HueCursor {
    pub fn new(degrees: f32) -> Self {
        Self(wrap(degrees))
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    pub fn advance(&mut self, degrees: f32) {
        self.0 = wrap(self.0 + degrees);
    }
}

fn wrap(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
