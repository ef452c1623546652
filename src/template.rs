use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use svgr::format_number;

use crate::error::Result;
use crate::slot::SlotTable;
use crate::solidify::solid_elements;
use crate::transform::{find_view_box, PathTransformer};

const SF_SYMBOLS: &str = include_str!("template/sf_symbols.svg");
const PREVIEW: &str = include_str!("template/preview.svg");

/// Placeholders present in both skeletons: Ultralight, Regular and Black.
pub const TEMPLATE_SLOTS: usize = 3;

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{slot-([0-9]+)\}\}").expect("valid placeholder pattern"))
}

///Every slot is rendered first and the skeleton is then filled in a single
///scan, so text a slot brings in is never taken for another placeholder.
fn fill<F>(skeleton: &str, slot: F) -> Result<String>
where
    F: FnMut(usize) -> Result<String>,
{
    let slots = (0..TEMPLATE_SLOTS).map(slot).collect::<Result<Vec<String>>>()?;

    let document = placeholder().replace_all(skeleton, |caps: &Captures| {
	match caps[1].parse::<usize>().ok().and_then(|index| slots.get(index)) {
	    Some(content) => content.clone(),
	    None => String::from(&caps[0]),
	}
    });

    Ok(document.into_owned())
}

/// The SF Symbols template (v6.0) with the small size of each weight filled.
pub struct SymbolTemplate<'a> {
    transformer: PathTransformer<'a>,
}

impl<'a> SymbolTemplate<'a> {
    pub fn new(transformer: PathTransformer<'a>) -> Self {
	SymbolTemplate { transformer }
    }

    pub fn render(&self, fixed_svg: &str) -> Result<String> {
	debug!(mode = ?self.transformer.mode(), "rendering symbol template");
	fill(SF_SYMBOLS, |index| self.transformer.transform(fixed_svg, index))
    }
}

/// An 800x600 sheet that shows the whole icon document in each weight
/// column, scaled with a group transform instead of rewritten path data.
pub struct PreviewTemplate<'a> {
    table: &'a SlotTable,
}

impl<'a> PreviewTemplate<'a> {
    pub fn new(table: &'a SlotTable) -> Self {
	PreviewTemplate { table }
    }

    pub fn render(&self, fixed_svg: &str) -> Result<String> {
	let view_box = find_view_box(fixed_svg);
	let elements = solid_elements(fixed_svg);

	fill(PREVIEW, |index| {
	    let placement = self.table.preview_placement(index, &view_box)?;
	    Ok(format!(
		"<g transform=\"translate({}, {}) scale({})\">\n          {}\n      </g>",
		format_number(placement.offset_x),
		format_number(placement.offset_y),
		format_number(placement.scale_x),
		elements
	    ))
	})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transform::{transform_paths_for_slot, AxisMode};
    use pretty_assertions::assert_eq;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 4 L20 20"/></svg>"#;

    #[test]
    fn skeletons_have_every_placeholder() {
	for index in 0..TEMPLATE_SLOTS {
	    let marker = format!("{{{{slot-{}}}}}", index);
	    assert_eq!(SF_SYMBOLS.matches(&marker).count(), 1);
	    assert_eq!(PREVIEW.matches(&marker).count(), 1);
	}
	assert_eq!(placeholder().find_iter(SF_SYMBOLS).count(), TEMPLATE_SLOTS);
	assert_eq!(placeholder().find_iter(PREVIEW).count(), TEMPLATE_SLOTS);
    }

    #[test]
    fn placeholder_text_in_icon_is_kept_literally() {
	let icon = r#"<svg viewBox="0 0 24 24"><title>{{slot-1}}</title><path d="M4 4 L20 20"/></svg>"#;
	let table = SlotTable::default();

	let document = PreviewTemplate::new(&table).render(icon).unwrap();

	assert_eq!(document.matches("translate(").count(), TEMPLATE_SLOTS);
	assert_eq!(document.matches("<title>{{slot-1}}</title>").count(), TEMPLATE_SLOTS);
    }

    #[test]
    fn fills_each_weight_with_its_slot() {
	let table = SlotTable::default();
	let document = SymbolTemplate::new(PathTransformer::new(&table)).render(ICON).unwrap();

	assert!(!document.contains("{{"));
	for (index, group) in ["Ultralight-S", "Regular-S", "Black-S"].iter().enumerate() {
	    let d = transform_paths_for_slot(ICON, index).unwrap();
	    let start = document.find(&format!("<g id=\"{}\"", group)).unwrap();
	    let path = &document[start..];
	    let path = &path[..path.find("</g>").unwrap()];

	    assert!(path.contains(&format!("d=\"{}\"", d)), "{} holds {}", group, path);
	}
    }

    #[test]
    fn keeps_template_metadata() {
	let table = SlotTable::default();
	let document = SymbolTemplate::new(PathTransformer::new(&table)).render(ICON).unwrap();

	assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
	assert!(document.contains("Template v.6.0"));
	assert!(document.contains("viewBox=\"0 0 3300 2200\""));
	assert!(document.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn short_table_cannot_fill_template() {
	let mut table = SlotTable::default();
	table.slots.truncate(2);

	let result = SymbolTemplate::new(PathTransformer::new(&table).with_mode(AxisMode::CommandAware)).render(ICON);

	assert!(matches!(result, Err(Error::UnknownSlot { index: 2, available: 2 })));
    }

    #[test]
    fn preview_wraps_solid_elements() {
	let table = SlotTable::default();
	let document = PreviewTemplate::new(&table).render(ICON).unwrap();

	let scale = 70.0 / 24.0;
	let expected = format!(
	    "<g transform=\"translate({}, {}) scale({})\">\n          <path d=\"M4 4 L20 20\" fill=\"black\" />\n      </g>",
	    format_number(265.0 - (24.0 * scale) / 2.0),
	    format_number(111.0 - (24.0 * scale) / 2.0),
	    format_number(scale),
	);
	assert!(document.contains(&expected), "{}", document);
	assert!(document.contains("Generated by symbolset"));
    }
}
