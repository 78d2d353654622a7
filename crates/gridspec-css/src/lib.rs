//! CSS output for layout plans.
//!
//! The container becomes a wrapping flex box; every cell gets one rule
//! selecting it as the Nth child of the container:
//!
//! ```css
//! .grid {
//!   display: flex;
//!   flex-wrap: wrap;
//! }
//!
//! .grid > :nth-child(1) {
//!   width: calc((100% - 60px) / 3 * 2 + 30px);
//!   margin-right: 30px;
//! }
//! ```

use gridspec_layout::{LayoutCell, LayoutPlan};

/// Options for CSS output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOptions {
    /// Selector of the grid container
    pub selector: String,
    /// Indentation for declarations
    pub indent: String,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            selector: ".grid".to_string(),
            indent: "  ".to_string(),
        }
    }
}

impl CssOptions {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl ToString) -> Self {
        Self {
            property,
            value: value.to_string(),
        }
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// Build the container rule followed by one rule per cell.
pub fn rules(plan: &LayoutPlan, options: &CssOptions) -> Vec<Rule> {
    let container = Rule {
        selector: options.selector.clone(),
        declarations: vec![
            Declaration::new("display", "flex"),
            Declaration::new("flex-wrap", "wrap"),
        ],
    };

    std::iter::once(container)
        .chain(plan.cells.iter().map(|cell| cell_rule(cell, &options.selector)))
        .collect()
}

fn cell_rule(cell: &LayoutCell, container: &str) -> Rule {
    let mut declarations = vec![Declaration::new("width", cell.width)];
    if let Some(left) = cell.margin_left {
        declarations.push(Declaration::new("margin-left", left));
    }
    if let Some(right) = cell.margin_right {
        declarations.push(Declaration::new("margin-right", right));
    }
    if let Some(bottom) = cell.margin_bottom {
        declarations.push(Declaration::new("margin-bottom", bottom));
    }

    Rule {
        selector: format!("{container} > :nth-child({})", cell.index),
        declarations,
    }
}

/// Render a plan as a CSS stylesheet.
pub fn render_css(plan: &LayoutPlan, options: &CssOptions) -> String {
    let mut css = String::new();

    for (i, rule) in rules(plan, options).iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        css.push_str(&format!("{} {{\n", rule.selector));
        for decl in &rule.declarations {
            css.push_str(&format!("{}{}: {};\n", options.indent, decl.property, decl.value));
        }
        css.push_str("}\n");
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridspec_core::{GridSpec, Length, RowEntry};
    use gridspec_layout::{compile, GridOptions};

    fn plan(rows: Vec<RowEntry>) -> LayoutPlan {
        compile(&GridSpec::new(rows), &GridOptions::default()).unwrap()
    }

    #[test]
    fn test_container_rule_only_for_empty_plan() {
        let css = render_css(&LayoutPlan::default(), &CssOptions::default());
        assert_eq!(css, ".grid {\n  display: flex;\n  flex-wrap: wrap;\n}\n");
    }

    #[test]
    fn test_rules_follow_cell_indices() {
        let plan = plan(vec![RowEntry::from("x x"), RowEntry::Distribute(3)]);
        let rules = rules(&plan, &CssOptions::default().with_selector("#main"));

        assert_eq!(rules.len(), 6);
        assert_eq!(rules[0].selector, "#main");
        assert_eq!(rules[1].selector, "#main > :nth-child(1)");
        assert_eq!(rules[5].selector, "#main > :nth-child(5)");
    }

    #[test]
    fn test_margins_are_omitted_when_absent() {
        let plan = plan(vec![RowEntry::from("x  x")]);
        let rules = rules(&plan, &CssOptions::default());

        let first: Vec<_> = rules[1].declarations.iter().map(|d| d.property).collect();
        assert_eq!(first, vec!["width", "margin-right"]);

        let second: Vec<_> = rules[2].declarations.iter().map(|d| d.property).collect();
        assert_eq!(second, vec!["width", "margin-left"]);
    }

    #[test]
    fn test_render_mixed_grid() {
        let plan = plan(vec![RowEntry::from("x-x x"), RowEntry::Distribute(2)]);
        let css = render_css(&plan, &CssOptions::default());

        insta::assert_snapshot!(css.trim_end(), @r###"
        .grid {
          display: flex;
          flex-wrap: wrap;
        }

        .grid > :nth-child(1) {
          width: calc((100% - 60px) / 3 * 2 + 30px);
          margin-right: 30px;
          margin-bottom: 30px;
        }

        .grid > :nth-child(2) {
          width: calc((100% - 60px) / 3);
          margin-bottom: 30px;
        }

        .grid > :nth-child(3) {
          width: calc((100% - 30px) / 2);
          margin-right: 30px;
        }

        .grid > :nth-child(4) {
          width: calc((100% - 30px) / 2);
        }
        "###);
    }

    #[test]
    fn test_render_rem_gutters() {
        let spec = GridSpec::new(vec![RowEntry::from("x x"), RowEntry::from("x-x")]);
        let options = GridOptions::default()
            .with_gutter(Length::rem(1.5))
            .with_gutter_height(Length::rem(1.0));
        let plan = compile(&spec, &options).unwrap();
        let css = render_css(&plan, &CssOptions::default());

        assert!(css.contains("width: calc((100% - 1.5rem) / 2);"));
        assert!(css.contains("margin-right: 1.5rem;"));
        assert!(css.contains("margin-bottom: 1rem;"));
        assert!(css.contains(".grid > :nth-child(3) {\n  width: 100%;\n}"));
    }
}
