//! Xcode asset catalog metadata.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
	Info {
	    author: String::from("xcode"),
	    version: 1,
	}
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub idiom: String,
    pub filename: String,
}

/// A `Contents.json` file, either for the catalog itself or for one
/// `.symbolset` inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contents {
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<Symbol>>,
}

impl Contents {
    pub fn catalog() -> Self {
	Contents {
	    info: Info::default(),
	    symbols: None,
	}
    }

    pub fn symbolset(file_name: &str) -> Self {
	Contents {
	    info: Info::default(),
	    symbols: Some(vec![Symbol {
		idiom: String::from("universal"),
		filename: String::from(file_name),
	    }]),
	}
    }

    pub fn to_json(&self) -> Result<String> {
	Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn symbolset_dir_name(icon: &str) -> String {
    format!("{}.symbolset", icon.replace('-', "."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_contents() {
	assert_eq!(
	    Contents::catalog().to_json().unwrap(),
	    r#"{
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#
	);
    }

    #[test]
    fn symbolset_contents() {
	assert_eq!(
	    Contents::symbolset("arrow-left.svg").to_json().unwrap(),
	    r#"{
  "info": {
    "author": "xcode",
    "version": 1
  },
  "symbols": [
    {
      "idiom": "universal",
      "filename": "arrow-left.svg"
    }
  ]
}"#
	);
    }

    #[test]
    fn reads_back_catalog_contents() {
	let contents: Contents = serde_json::from_str(r#"{"info":{"author":"xcode","version":1}}"#).unwrap();

	assert_eq!(contents, Contents::catalog());
    }

    #[test]
    fn symbolset_names_use_dots() {
	assert_eq!(symbolset_dir_name("arrow-left"), "arrow.left.symbolset");
	assert_eq!(symbolset_dir_name("home"), "home.symbolset");
    }
}
