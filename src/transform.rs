use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use svgr::{format_number, Command, Data, Point, Position, ViewBox};
use tracing::{debug, warn};

use crate::error::Result;
use crate::slot::{Placement, SlotTable};

/// Drawn in place of an icon that has no `<path>` elements.
pub const FALLBACK_PATH: &str = "M24,12 a12,12 0 1,0 -24,0 a12,12 0 1,0 24,0";

/// How numbers inside path data are assigned to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisMode {
    /// Numbers alternate x, y, x, ... in the order they appear, whatever
    /// command they belong to. Arc flags and H/V arguments end up on the
    /// wrong axis; this is what the published template output relies on.
    Positional,
    /// Each command's arguments are mapped by what they mean: relative
    /// coordinates are only scaled, arc radii are scaled and arc rotation
    /// and flags are kept.
    CommandAware,
}

impl Default for AxisMode {
    fn default() -> Self {
	AxisMode::Positional
    }
}

fn view_box_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"viewBox=["']([^"']*)["']"#).expect("valid viewBox pattern"))
}

fn path_data_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<path[^>]*\sd="([^"]*)"[^>]*>"#).expect("valid path pattern"))
}

fn number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?[0-9]+(\.[0-9]+)?").expect("valid number pattern"))
}

fn view_box_or_default(raw: Option<&str>) -> ViewBox {
    let text = match raw {
	Some(text) => text,
	None => {
	    warn!("no viewBox attribute, falling back to {}", ViewBox::default());
	    return ViewBox::default();
	}
    };

    svgr::parse_view_box(text).unwrap_or_else(|err| {
	warn!("{}, falling back to {}", err, ViewBox::default());
	ViewBox::default()
    })
}

/// The first `viewBox` attribute anywhere in the markup.
pub(crate) fn find_view_box(svg: &str) -> ViewBox {
    let raw = view_box_attribute()
	.captures(svg)
	.and_then(|caps| caps.get(1))
	.map(|m| m.as_str());

    view_box_or_default(raw)
}

fn find_path_data(svg: &str) -> Vec<&str> {
    path_data_attribute()
	.captures_iter(svg)
	.filter_map(|caps| caps.get(1))
	.map(|m| m.as_str())
	.collect()
}

fn fallback() -> String {
    warn!("no path data found, drawing the fallback circle");
    String::from(FALLBACK_PATH)
}

fn rewrite_positional(d: &str, placement: &Placement) -> String {
    let mut is_x = true;

    number()
	.replace_all(d, |caps: &Captures| {
	    let token = &caps[0];
	    let mapped = match token.parse::<f64>() {
		Ok(value) if is_x => format_number(placement.x(value)),
		Ok(value) => format_number(placement.y(value)),
		Err(_) => String::from(token),
	    };
	    is_x = !is_x;

	    mapped
	})
	.into_owned()
}

fn map_point(placement: &Placement, pos: Position, (x, y): Point) -> Point {
    match pos {
	Position::Absolute => (placement.x(x), placement.y(y)),
	Position::Relative => (placement.dx(x), placement.dy(y)),
    }
}

fn map_points(placement: &Placement, pos: Position, points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| map_point(placement, pos, *p)).collect()
}

fn map_command(placement: &Placement, command: &Command) -> Command {
    let groups2 = |pos: Position, groups: &[[Point; 2]]| -> Vec<[Point; 2]> {
	groups
	    .iter()
	    .map(|[a, b]| [map_point(placement, pos, *a), map_point(placement, pos, *b)])
	    .collect()
    };

    match command {
	Command::Move(pos, p) => Command::Move(*pos, map_points(placement, *pos, p)),
	Command::Line(pos, p) => Command::Line(*pos, map_points(placement, *pos, p)),
	Command::SmoothQuadraticCurve(pos, p) => {
	    Command::SmoothQuadraticCurve(*pos, map_points(placement, *pos, p))
	}
	Command::HorizontalLine(pos, p) => Command::HorizontalLine(
	    *pos,
	    p.iter()
		.map(|&x| match pos {
		    Position::Absolute => placement.x(x),
		    Position::Relative => placement.dx(x),
		})
		.collect(),
	),
	Command::VerticalLine(pos, p) => Command::VerticalLine(
	    *pos,
	    p.iter()
		.map(|&y| match pos {
		    Position::Absolute => placement.y(y),
		    Position::Relative => placement.dy(y),
		})
		.collect(),
	),
	Command::QuadraticCurve(pos, p) => Command::QuadraticCurve(*pos, groups2(*pos, p.as_slice())),
	Command::SmoothCubicCurve(pos, p) => Command::SmoothCubicCurve(*pos, groups2(*pos, p.as_slice())),
	Command::CubicCurve(pos, p) => Command::CubicCurve(
	    *pos,
	    p.iter()
		.map(|[a, b, c]| {
		    [
			map_point(placement, *pos, *a),
			map_point(placement, *pos, *b),
			map_point(placement, *pos, *c),
		    ]
		})
		.collect(),
	),
	Command::EllipticalArc(pos, p) => Command::EllipticalArc(
	    *pos,
	    p.iter()
		.map(|arc| svgr::Arc {
		    radii: (placement.dx(arc.radii.0), placement.dy(arc.radii.1)),
		    to: map_point(placement, *pos, arc.to),
		    ..*arc
		})
		.collect(),
	),
	Command::Close => Command::Close,
    }
}

///A leading `m` is absolute for its first pair only. It is spelled out as
///`M` so the rewritten path can be appended after another one.
fn rewrite_commands(data: &Data, placement: &Placement) -> Data {
    let mut commands = Vec::with_capacity(data.0.len() + 1);

    for (i, command) in data.iter().enumerate() {
	match command {
	    Command::Move(Position::Relative, p) if i == 0 && !p.is_empty() => {
		commands.push(Command::Move(
		    Position::Absolute,
		    vec![map_point(placement, Position::Absolute, p[0])],
		));
		if p.len() > 1 {
		    commands.push(Command::Line(
			Position::Relative,
			map_points(placement, Position::Relative, &p[1..]),
		    ));
		}
	    }
	    other => commands.push(map_command(placement, other)),
	}
    }

    Data::from(commands)
}

/// Moves the path data of an icon into one slot of a [`SlotTable`].
#[derive(Debug, Clone, Copy)]
pub struct PathTransformer<'a> {
    table: &'a SlotTable,
    mode: AxisMode,
}

impl<'a> PathTransformer<'a> {
    pub fn new(table: &'a SlotTable) -> Self {
	PathTransformer {
	    table,
	    mode: AxisMode::default(),
	}
    }

    pub fn with_mode(self, mode: AxisMode) -> Self {
	PathTransformer { mode, ..self }
    }

    pub fn table(&self) -> &'a SlotTable {
	self.table
    }

    pub fn mode(&self) -> AxisMode {
	self.mode
    }

    /// Returns the `d` value of a single path holding every path of `svg`,
    /// placed in the slot at `slot_index`.
    pub fn transform(&self, svg: &str, slot_index: usize) -> Result<String> {
	self.table.slot(slot_index)?;

	match self.mode {
	    AxisMode::Positional => self.positional(svg, slot_index),
	    AxisMode::CommandAware => self.command_aware(svg, slot_index),
	}
    }

    fn positional(&self, svg: &str, slot_index: usize) -> Result<String> {
	let paths = find_path_data(svg);
	if paths.is_empty() {
	    return Ok(fallback());
	}

	let view_box = find_view_box(svg);
	let placement = self.table.placement(slot_index, &view_box)?;
	debug!(slot = slot_index, ?placement, paths = paths.len(), "rewriting path data");

	let rewritten: Vec<String> = paths
	    .iter()
	    .map(|d| rewrite_positional(d, &placement))
	    .collect();

	Ok(rewritten.join(" "))
    }

    fn command_aware(&self, svg: &str, slot_index: usize) -> Result<String> {
	let outline = svgr::read_outline(svg)?;
	if outline.paths.is_empty() {
	    return Ok(fallback());
	}

	let view_box = view_box_or_default(outline.view_box.as_deref());
	let placement = self.table.placement(slot_index, &view_box)?;
	debug!(slot = slot_index, ?placement, paths = outline.paths.len(), "rewriting path commands");

	let mut rewritten = Vec::with_capacity(outline.paths.len());
	for d in &outline.paths {
	    let data = svgr::parse_data(d)?;
	    if data.is_empty() {
		continue;
	    }
	    rewritten.push(rewrite_commands(&data, &placement).to_string());
	}

	Ok(rewritten.join(" "))
    }
}

/// Places the paths of `svg` in slot `slot_index` of the default template,
/// alternating axes by position.
pub fn transform_paths_for_slot(svg: &str, slot_index: usize) -> Result<String> {
    PathTransformer::new(&SlotTable::default()).transform(svg, slot_index)
}
