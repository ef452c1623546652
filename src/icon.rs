use std::path::Path;

use tracing::{info, warn};

use crate::catalog::{symbolset_dir_name, Contents};
use crate::config::Config;
use crate::drawable;
use crate::error::Result;
use crate::template::SymbolTemplate;

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub file_name: String,
    pub xml: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbolset {
    pub dir_name: String,
    pub file_name: String,
    pub svg: String,
    pub contents: String,
}

/// What a single source icon turns into. Writing it out is left to the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub struct IconArtifacts {
    pub name: String,
    pub drawable: Option<Drawable>,
    pub symbolset: Symbolset,
}

/// The file name of `source` without a trailing `.svg`.
pub fn icon_name(source: &str) -> &str {
    let file_name = file_name(source);
    file_name.strip_suffix(".svg").unwrap_or(file_name)
}

fn file_name(source: &str) -> &str {
    Path::new(source)
	.file_name()
	.and_then(|name| name.to_str())
	.unwrap_or(source)
}

impl IconArtifacts {
    ///`fixed_svg` is the icon after geometry repair, `drawable_xml` the
    ///converter's output for it, if there was any.
    pub fn build(source: &str, fixed_svg: &str, drawable_xml: Option<&str>, config: &Config) -> Result<Self> {
	let name = icon_name(source);
	let file_name = file_name(source);

	let drawable = match drawable_xml {
	    Some(xml) => Some(Drawable {
		file_name: drawable::resource_file_name(name),
		xml: drawable::retint(xml, &config.drawable.fill_color).into_owned(),
	    }),
	    None => {
		warn!(icon = name, "no vector drawable to retint");
		None
	    }
	};

	let symbolset = Symbolset {
	    dir_name: symbolset_dir_name(name),
	    file_name: String::from(file_name),
	    svg: SymbolTemplate::new(config.transformer()).render(fixed_svg)?,
	    contents: Contents::symbolset(file_name).to_json()?,
	};

	info!(icon = name, symbolset = %symbolset.dir_name, "built icon artifacts");

	Ok(IconArtifacts {
	    name: String::from(name),
	    drawable,
	    symbolset,
	})
    }
}
