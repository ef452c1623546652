use nom::{
    character::complete::{char, multispace0, multispace1, one_of},
    combinator::{all_consuming, map, opt},
    error::{Error, ErrorKind},
    multi::{many0, many1},
    number::complete::double,
    sequence::{pair, preceded, terminated, tuple},
    Finish, IResult,
};

use svg::node::element::tag;
use svg::node::element::tag::{Path, SVG};
use svg::parser::Event;

use crate::error::ParseError;
use crate::types::{Arc, Command, Data, Outline, Point, Position, ViewBox};

fn comma_wsp(input: &str) -> IResult<&str, ()> {
    map(tuple((multispace0, opt(char(',')), multispace0)), |_| ())(input)
}

fn coord(input: &str) -> IResult<&str, f64> {
    preceded(comma_wsp, double)(input)
}

fn flag(input: &str) -> IResult<&str, bool> {
    preceded(comma_wsp, map(one_of("01"), |c| c == '1'))(input)
}

fn point(input: &str) -> IResult<&str, Point> {
    pair(coord, coord)(input)
}

fn arc(input: &str) -> IResult<&str, Arc> {
    map(
	tuple((coord, coord, coord, flag, flag, point)),
	|(rx, ry, rotation, large_arc, sweep, to)| Arc {
	    radii: (rx, ry),
	    rotation,
	    large_arc,
	    sweep,
	    to,
	},
    )(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    let (input, letter) = preceded(multispace0, one_of("MmLlHhVvCcSsQqTtAaZz"))(input)?;
    let pos = Position::of(letter);

    match letter.to_ascii_uppercase() {
	'M' => map(many1(point), move |p| Command::Move(pos, p))(input),
	'L' => map(many1(point), move |p| Command::Line(pos, p))(input),
	'H' => map(many1(coord), move |p| Command::HorizontalLine(pos, p))(input),
	'V' => map(many1(coord), move |p| Command::VerticalLine(pos, p))(input),
	'Q' => map(
	    many1(pair(point, point)),
	    move |p| Command::QuadraticCurve(pos, p.into_iter().map(|(a, b)| [a, b]).collect()),
	)(input),
	'T' => map(many1(point), move |p| Command::SmoothQuadraticCurve(pos, p))(input),
	'C' => map(
	    many1(tuple((point, point, point))),
	    move |p| Command::CubicCurve(pos, p.into_iter().map(|(a, b, c)| [a, b, c]).collect()),
	)(input),
	'S' => map(
	    many1(pair(point, point)),
	    move |p| Command::SmoothCubicCurve(pos, p.into_iter().map(|(a, b)| [a, b]).collect()),
	)(input),
	'A' => map(many1(arc), move |p| Command::EllipticalArc(pos, p))(input),
	'Z' => Ok((input, Command::Close)),
	_ => Err(nom::Err::Error(Error::new(input, ErrorKind::OneOf))),
    }
}

/// Parses the content of a `d` attribute.
pub fn parse_data(data: &str) -> Result<Data, ParseError> {
    let mut parser = all_consuming(terminated(many0(command), multispace0));

    parser(data)
	.finish()
	.map(|(_, commands)| Data::from(commands))
	.map_err(|err| ParseError::PathData {
	    data: data.to_string(),
	    offset: data.len() - err.input.len(),
	})
}

///Four numbers separated by whitespace, nothing else. A zero or negative
///extent is rejected along with anything that does not parse.
pub fn parse_view_box(text: &str) -> Result<ViewBox, ParseError> {
    let mut parser = all_consuming(tuple((
	double,
	preceded(multispace1, double),
	preceded(multispace1, double),
	preceded(multispace1, double),
    )));

    let err = || ParseError::ViewBox(text.to_string());
    let (_, (x, y, width, height)) = parser(text).finish().map_err(|_: Error<&str>| err())?;

    let valid_extent = |v: f64| v.is_finite() && v > 0.0;
    if !valid_extent(width) || !valid_extent(height) {
	return Err(err());
    }

    Ok(ViewBox { x, y, width, height })
}

pub fn read_outline(markup: &str) -> Result<Outline, ParseError> {
    let mut outline = Outline::default();
    let mut seen_root = false;

    for event in svg::read(markup)? {
	match event {
	    Event::Error(err) => return Err(ParseError::Markup(err.to_string())),
	    Event::Tag(SVG, tag::Type::Start, attributes)
	    | Event::Tag(SVG, tag::Type::Empty, attributes) => {
		if !seen_root {
		    seen_root = true;
		    outline.view_box = attributes.get("viewBox").map(|vb| vb.to_string());
		}
	    }
	    Event::Tag(Path, tag::Type::Start, attributes)
	    | Event::Tag(Path, tag::Type::Empty, attributes) => {
		if let Some(d) = attributes.get("d") {
		    outline.paths.push(d.to_string());
		}
	    }
	    _ => (),
	}
    }

    Ok(outline)
}
