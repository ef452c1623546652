use std::fmt::{self, Display, Formatter};

use crate::types::{Arc, Command, Data, Point};

/// Shortest decimal text that reads back to the same value. Never uses an
/// exponent, so the output stays a plain run of digits.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
	// also covers -0.0
	return String::from("0");
    }

    value.to_string()
}

fn point(p: &Point) -> String {
    format!("{},{}", format_number(p.0), format_number(p.1))
}

fn points(ps: &[Point]) -> String {
    ps.iter().map(point).collect::<Vec<_>>().join(" ")
}

fn arc(a: &Arc) -> String {
    format!(
	"{} {} {},{} {}",
	point(&a.radii),
	format_number(a.rotation),
	a.large_arc as u8,
	a.sweep as u8,
	point(&a.to)
    )
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
	let args = match self {
	    Command::Move(_, p) | Command::Line(_, p) | Command::SmoothQuadraticCurve(_, p) => points(p),
	    Command::HorizontalLine(_, p) | Command::VerticalLine(_, p) => {
		p.iter().map(|v| format_number(*v)).collect::<Vec<_>>().join(" ")
	    }
	    Command::QuadraticCurve(_, p) | Command::SmoothCubicCurve(_, p) => {
		p.iter().map(|group| points(group)).collect::<Vec<_>>().join(" ")
	    }
	    Command::CubicCurve(_, p) => p.iter().map(|group| points(group)).collect::<Vec<_>>().join(" "),
	    Command::EllipticalArc(_, p) => p.iter().map(arc).collect::<Vec<_>>().join(" "),
	    Command::Close => String::new(),
	};

	write!(f, "{}{}", self.letter(), args)
    }
}

impl Display for Data {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
	let commands: Vec<String> = self.iter().map(|c| c.to_string()).collect();
	write!(f, "{}", commands.join(" "))
    }
}
