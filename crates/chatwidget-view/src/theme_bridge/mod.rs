//! Theme bridge: derived style directives for things inline styles can't
//! reach.
//!
//! Input placeholder color lives on a pseudo-element, so it is expressed as a
//! scoped stylesheet rule that tracks the input text color. Values are
//! validated before they are written into stylesheet text.

mod generate;
mod sanitize;

pub use generate::{
    generate_inherited_placeholder_css, generate_placeholder_css, input_class,
    placeholder_style_id,
};
pub use sanitize::{css_identifier, validate_css_color, UnsafeColor};
