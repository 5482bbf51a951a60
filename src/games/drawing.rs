//! Finger drawing on a canvas. Only the geometry is tracked here; the
//! client renders the strokes.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    strokes: Vec<Stroke>,
    pen_down: bool,
    /// Total ink needed before the exercise counts as done.
    goal_length: f32,
}

impl Canvas {
    /// Negative or NaN dimensions collapse to zero.
    pub fn new(width: f32, height: f32, goal_length: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            strokes: Vec::new(),
            pen_down: false,
            goal_length,
        }
    }

    pub fn pen_down(&mut self, at: Point) {
        self.pen_down = true;
        self.strokes.push(Stroke {
            points: vec![self.clamp(at)],
        });
    }

    /// Extends the current stroke; ignored while the pen is up.
    pub fn move_to(&mut self, to: Point) -> bool {
        if !self.pen_down {
            return false;
        }
        let to = self.clamp(to);
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.points.push(to);
                true
            }
            None => false,
        }
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn ink(&self) -> f32 {
        self.strokes.iter().map(Stroke::length).sum()
    }

    pub fn is_complete(&self) -> bool {
        !self.pen_down && self.ink() >= self.goal_length
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.pen_down = false;
    }

    fn clamp(&self, point: Point) -> Point {
        Point::new(point.x.clamp(0.0, self.width), point.y.clamp(0.0, self.height))
    }
}
