//! Locating color values inside a style document.
//!
//! Colors can sit anywhere in a style: a `paint` property, an element of
//! an `interpolate` expression, a stop of a legacy function. The locator
//! walks the whole tree and hands every string that looks like a color
//! (see [`is_color_description`]) to a rewrite closure, storing the result
//! in place.
//!
//! Strings are only ever rewritten from their parent container. A bare
//! string passed as the root is left alone.
//!
//! # Example
//!
//! ```
//! use mapkit_style::locate::find_color;
//! use serde_json::json;
//!
//! let mut doc = json!([{ "paint": { "fill-color": "#ff0000" } }, "road"]);
//! find_color(&mut doc, |c| c.to_uppercase());
//! assert_eq!(doc, json!([{ "paint": { "fill-color": "#FF0000" } }, "road"]));
//! ```

use std::convert::Infallible;

use serde_json::Value;

pub use mapkit_color::is_color_description;

/// Rewrites every color leaf of `node` with `rewrite`.
///
/// Returns the number of leaves rewritten.
pub fn find_color<F>(node: &mut Value, mut rewrite: F) -> usize
where
    F: FnMut(&str) -> String,
{
    match try_find_color(node, &mut |color: &str| Ok::<_, Infallible>(rewrite(color))) {
        Ok(count) => count,
        Err(never) => match never {},
    }
}

/// Fallible form of [`find_color`].
///
/// The first error aborts the traversal and is returned; leaves visited
/// before it keep their rewritten value.
pub fn try_find_color<F, E>(node: &mut Value, rewrite: &mut F) -> Result<usize, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut count = 0;
    walk(node, rewrite, &mut count)?;
    Ok(count)
}

fn walk<F, E>(node: &mut Value, rewrite: &mut F, count: &mut usize) -> Result<(), E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    match node {
        Value::Array(items) => {
            for item in items.iter_mut() {
                visit(item, rewrite, count)?;
            }
        }
        Value::Object(map) => {
            for value in map.values_mut() {
                visit(value, rewrite, count)?;
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
    Ok(())
}

fn visit<F, E>(child: &mut Value, rewrite: &mut F, count: &mut usize) -> Result<(), E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    if let Value::String(s) = child {
        if is_color_description(s.as_str()) {
            *s = rewrite(s.as_str())?;
            *count += 1;
        }
        return Ok(());
    }
    walk(child, rewrite, count)
}
