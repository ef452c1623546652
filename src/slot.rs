use serde::{Deserialize, Serialize};
use svgr::ViewBox;

use crate::error::{Error, Result};

pub const GUIDE_HEIGHT: f64 = 70.459;
pub const SCALE_MODIFIER: f64 = 1.1;
pub const PREVIEW_EXTENT: f64 = 70.0;

/// One weight variant of the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub target_size: f64,
    pub guide_width: f64,
    /// Where the preview template centers this variant.
    #[serde(default)]
    pub preview_center: (f64, f64),
}

impl Slot {
    fn new(name: &str, target_size: f64, guide_width: f64, preview_center: (f64, f64)) -> Self {
	Slot {
	    name: String::from(name),
	    target_size,
	    guide_width,
	    preview_center,
	}
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotTable {
    pub guide_height: f64,
    pub scale_modifier: f64,
    pub preview_extent: f64,
    pub slots: Vec<Slot>,
}

impl Default for SlotTable {
    fn default() -> Self {
	SlotTable {
	    guide_height: GUIDE_HEIGHT,
	    scale_modifier: SCALE_MODIFIER,
	    preview_extent: PREVIEW_EXTENT,
	    slots: vec![
		Slot::new("Ultralight", 74.44922, 88.124, (265.0, 111.0)),
		Slot::new("Regular", 78.80859, 92.53, (465.0, 111.0)),
		Slot::new("Black", 83.98438, 97.66, (665.0, 111.0)),
	    ],
	}
    }
}

/// Scale and offset that carry viewBox coordinates into a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Placement {
    pub fn x(&self, value: f64) -> f64 {
	value * self.scale_x + self.offset_x
    }

    pub fn y(&self, value: f64) -> f64 {
	value * self.scale_y + self.offset_y
    }

    pub fn dx(&self, value: f64) -> f64 {
	value * self.scale_x
    }

    pub fn dy(&self, value: f64) -> f64 {
	value * self.scale_y
    }
}

impl SlotTable {
    pub fn len(&self) -> usize {
	self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
	self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Result<&Slot> {
	self.slots.get(index).ok_or(Error::UnknownSlot {
	    index,
	    available: self.slots.len(),
	})
    }

    ///Centers the scaled viewBox inside the slot's guide box. The modifier
    ///applies to both axes, so non-square viewBoxes are stretched to the
    ///slot's target size on each axis independently.
    pub fn placement(&self, index: usize, view_box: &ViewBox) -> Result<Placement> {
	let slot = self.slot(index)?;

	let scale_x = (slot.target_size / view_box.width) * self.scale_modifier;
	let scale_y = (slot.target_size / view_box.height) * self.scale_modifier;

	let scaled_width = view_box.width * scale_x;
	let scaled_height = view_box.height * scale_y;

	Ok(Placement {
	    scale_x,
	    scale_y,
	    offset_x: (slot.guide_width - scaled_width) / 2.0,
	    offset_y: (self.guide_height - scaled_height) / 2.0,
	})
    }

    /// Aspect-preserving placement around the slot's preview center.
    pub fn preview_placement(&self, index: usize, view_box: &ViewBox) -> Result<Placement> {
	let slot = self.slot(index)?;
	let (center_x, center_y) = slot.preview_center;

	let scale = self.preview_extent / view_box.width.max(view_box.height);

	Ok(Placement {
	    scale_x: scale,
	    scale_y: scale,
	    offset_x: center_x - (view_box.width * scale) / 2.0,
	    offset_y: center_y - (view_box.height * scale) / 2.0,
	})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
    }

    #[test]
    fn default_table_matches_template() {
	let table = SlotTable::default();

	let names: Vec<&str> = table.slots.iter().map(|s| s.name.as_str()).collect();
	assert_eq!(names, vec!["Ultralight", "Regular", "Black"]);
	assert_eq!(table.slot(1).unwrap().target_size, 78.80859);
	assert_eq!(table.slot(2).unwrap().guide_width, 97.66);
	assert_eq!(table.guide_height, 70.459);
	assert_eq!(table.scale_modifier, 1.1);
    }

    #[rstest]
    #[case::past_the_end(3)]
    #[case::far_away(42)]
    fn rejects_unknown_slot(#[case] index: usize) {
	let table = SlotTable::default();

	match table.placement(index, &ViewBox::default()) {
	    Err(Error::UnknownSlot { index: i, available }) => {
		assert_eq!(i, index);
		assert_eq!(available, 3);
	    }
	    other => panic!("expected an unknown slot error, got {:?}", other),
	}
    }

    #[test]
    fn places_default_view_box_in_first_slot() {
	let placement = SlotTable::default().placement(0, &ViewBox::default()).unwrap();

	let scale = (74.44922 / 24.0) * 1.1;
	assert!(close(placement.scale_x, scale));
	assert!(close(placement.scale_y, scale));
	assert!(close(placement.offset_x, (88.124 - 24.0 * scale) / 2.0));
	assert!(close(placement.offset_y, (70.459 - 24.0 * scale) / 2.0));
	assert!((placement.offset_x - 3.11493).abs() < 1e-5, "offset_x = {}", placement.offset_x);
	assert!((placement.offset_y - -5.71757).abs() < 1e-5, "offset_y = {}", placement.offset_y);
    }

    #[test]
    fn scales_each_axis_on_its_own() {
	let view_box = ViewBox { x: 0.0, y: 0.0, width: 48.0, height: 24.0 };
	let placement = SlotTable::default().placement(2, &view_box).unwrap();

	assert!(close(placement.scale_x * 2.0, placement.scale_y));
	// both axes fill the target size, whatever the aspect ratio
	assert!(close(48.0 * placement.scale_x, 24.0 * placement.scale_y));
    }

    #[test]
    fn relative_mapping_ignores_offset() {
	let placement = Placement { scale_x: 2.0, scale_y: 3.0, offset_x: 10.0, offset_y: 20.0 };

	assert_eq!(placement.x(1.0), 12.0);
	assert_eq!(placement.y(1.0), 23.0);
	assert_eq!(placement.dx(1.0), 2.0);
	assert_eq!(placement.dy(-1.0), -3.0);
    }

    #[test]
    fn preview_keeps_aspect_ratio() {
	let view_box = ViewBox { x: 0.0, y: 0.0, width: 35.0, height: 70.0 };
	let placement = SlotTable::default().preview_placement(1, &view_box).unwrap();

	assert_eq!(placement.scale_x, 1.0);
	assert_eq!(placement.scale_y, 1.0);
	assert_eq!(placement.offset_x, 465.0 - 17.5);
	assert_eq!(placement.offset_y, 111.0 - 35.0);
    }
}
