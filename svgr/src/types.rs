use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
	ViewBox {
	    x: 0.0,
	    y: 0.0,
	    width: 24.0,
	    height: 24.0,
	}
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

impl Position {
    pub fn of(letter: char) -> Position {
	if letter.is_ascii_lowercase() {
	    Position::Relative
	} else {
	    Position::Absolute
	}
    }
}

pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub radii: Point,
    /// x axis rotation, in degrees
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Move(Position, Vec<Point>),
    Line(Position, Vec<Point>),
    HorizontalLine(Position, Vec<f64>),
    VerticalLine(Position, Vec<f64>),
    QuadraticCurve(Position, Vec<[Point; 2]>),
    SmoothQuadraticCurve(Position, Vec<Point>),
    CubicCurve(Position, Vec<[Point; 3]>),
    SmoothCubicCurve(Position, Vec<[Point; 2]>),
    EllipticalArc(Position, Vec<Arc>),
    Close,
}

impl Command {
    pub fn letter(&self) -> char {
	let (upper, pos) = match self {
	    Command::Move(pos, _) => ('M', pos),
	    Command::Line(pos, _) => ('L', pos),
	    Command::HorizontalLine(pos, _) => ('H', pos),
	    Command::VerticalLine(pos, _) => ('V', pos),
	    Command::QuadraticCurve(pos, _) => ('Q', pos),
	    Command::SmoothQuadraticCurve(pos, _) => ('T', pos),
	    Command::CubicCurve(pos, _) => ('C', pos),
	    Command::SmoothCubicCurve(pos, _) => ('S', pos),
	    Command::EllipticalArc(pos, _) => ('A', pos),
	    Command::Close => return 'Z',
	};

	match pos {
	    Position::Absolute => upper,
	    Position::Relative => upper.to_ascii_lowercase(),
	}
    }
}

/// A parsed `d` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(pub Vec<Command>);

impl Data {
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
	self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
	self.0.is_empty()
    }
}

impl From<Vec<Command>> for Data {
    fn from(commands: Vec<Command>) -> Self {
	Data(commands)
    }
}

/// What an icon document contributes to a template: the raw viewBox of its
/// root element and the `d` of every path, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub view_box: Option<String>,
    pub paths: Vec<String>,
}
