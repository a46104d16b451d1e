//! Rendering of implementor descriptions.
//!
//! Each fact becomes one line of the form `impl<'a> Hash for LogMetadata<'a>`, either
//! as rustdoc-style HTML with links to the trait and type pages or as plain text.

use crate::types::{ImplementorFact, path_segments};
use rustdoc_types::ItemKind;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

pub const DEFAULT_EXTERN_BASE_URL: &str = "https://doc.rust-lang.org/nightly";

/// Output flavour for rendered descriptions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionStyle {
    #[default]
    Html,
    Plain,
}

/// Settings shared by every description rendered in one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: DescriptionStyle,
    /// Base URL for traits owned by an extern root such as `core`.
    pub extern_base_url: String,
    /// Library roots whose documentation lives at `extern_base_url`.
    pub extern_roots: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: DescriptionStyle::Html,
            extern_base_url: DEFAULT_EXTERN_BASE_URL.to_string(),
            extern_roots: default_extern_roots(),
        }
    }
}

pub fn default_extern_roots() -> Vec<String> {
    ["core", "std", "alloc"].map(String::from).to_vec()
}

/// CSS class and URL prefix rustdoc uses for an item kind.
pub fn kind_class(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Struct => "struct",
        ItemKind::Enum => "enum",
        ItemKind::Union => "union",
        ItemKind::Trait => "trait",
        ItemKind::TraitAlias => "traitalias",
        ItemKind::Primitive => "primitive",
        ItemKind::ExternType => "foreigntype",
        _ => "type",
    }
}

/// Renders facts into description strings.
///
/// Provides both `write_*` methods (write to any buffer) and `format_*`
/// methods (return String).
pub struct DescriptionRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> DescriptionRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub fn format_description(&self, fact: &ImplementorFact) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_description(&mut out, fact);
        out
    }

    /// Writes the description of `fact` after normalizing it, so every title and
    /// link uses the same trimmed paths as the index key.
    pub fn write_description<W: Write>(&self, w: &mut W, fact: &ImplementorFact) -> fmt::Result {
        let fact = fact.normalized();
        match self.options.style {
            DescriptionStyle::Html => self.write_html(w, &fact),
            DescriptionStyle::Plain => write_plain(w, &fact),
        }
    }

    fn write_html<W: Write>(&self, w: &mut W, fact: &ImplementorFact) -> fmt::Result {
        let ty = &fact.implemented_type;
        let class = kind_class(ty.kind);

        w.write_str("impl")?;
        write_html_generics(w, &fact.generic_params)?;
        w.write_char(' ')?;

        w.write_str("<a class=\"trait\" href=\"")?;
        write_escaped(w, &self.trait_href(fact))?;
        w.write_str("\" title=\"trait ")?;
        write_escaped(w, &fact.trait_owner_library)?;
        w.write_str("::")?;
        write_escaped(w, &fact.trait_name)?;
        w.write_str("\">")?;
        write_escaped(w, &fact.trait_name)?;
        w.write_str("</a> for ")?;

        write!(w, "<a class=\"{}\" href=\"", class)?;
        write_escaped(w, &type_href(fact))?;
        write!(w, "\" title=\"{} ", class)?;
        write_escaped(w, &ty.qualified_path(&fact.implementing_library))?;
        w.write_str("\">")?;
        write_escaped(w, &ty.name)?;
        w.write_str("</a>")?;

        write_html_generics(w, &fact.generic_params)
    }

    /// Link to the trait's page, absolute for extern roots and relative otherwise.
    pub fn trait_href(&self, fact: &ImplementorFact) -> String {
        let segments: Vec<&str> = path_segments(&fact.trait_owner_library).collect();
        let relative = format!("{}/trait.{}.html", segments.join("/"), fact.trait_name);

        let is_extern = segments
            .first()
            .is_some_and(|root| self.options.extern_roots.iter().any(|r| r == *root));

        if is_extern {
            format!(
                "{}/{}",
                self.options.extern_base_url.trim_end_matches('/'),
                relative
            )
        } else {
            relative
        }
    }
}

/// Relative link to the implementing type's page, e.g. `log/enum.LogLevel.html`.
pub fn type_href(fact: &ImplementorFact) -> String {
    let ty = &fact.implemented_type;
    let module = ty.path.iter().flat_map(|s| path_segments(s));
    let segments = path_segments(&fact.implementing_library).chain(module);

    let mut href = String::new();
    for segment in segments {
        href.push_str(segment);
        href.push('/');
    }
    let _ = write!(href, "{}.{}.html", kind_class(ty.kind), ty.name);
    href
}

fn write_plain<W: Write>(w: &mut W, fact: &ImplementorFact) -> fmt::Result {
    let generics = if fact.generic_params.is_empty() {
        String::new()
    } else {
        format!("<{}>", fact.generic_params.join(", "))
    };
    write!(
        w,
        "impl{} {} for {}{}",
        generics, fact.trait_name, fact.implemented_type.name, generics
    )
}

fn write_html_generics<W: Write>(w: &mut W, params: &[String]) -> fmt::Result {
    if params.is_empty() {
        return Ok(());
    }
    w.write_str("&lt;")?;
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write_escaped(w, param)?;
    }
    w.write_str("&gt;")
}

fn write_escaped<W: Write>(w: &mut W, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => w.write_str("&amp;")?,
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '"' => w.write_str("&quot;")?,
            _ => w.write_char(c)?,
        }
    }
    Ok(())
}
