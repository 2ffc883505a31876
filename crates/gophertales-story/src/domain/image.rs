//! Illustration lookup.
//!
//! Images are a pure function of an arc's identity and are never read from
//! story data.

use gophertales_core::gopher::Gopher;

/// Illustration shared by every arc of the classic story.
pub const CLASSIC_IMAGE: &str = "home_gopher.png";

/// Illustration for an arc of the classic story.
#[must_use]
pub fn classic_image(_arc_name: &str) -> String {
    CLASSIC_IMAGE.to_owned()
}

/// Illustration for an arc of a gopher's storyline.
#[must_use]
pub fn gopher_image(gopher: Gopher, _arc_name: &str) -> String {
    format!("gopher_{gopher}.png")
}
