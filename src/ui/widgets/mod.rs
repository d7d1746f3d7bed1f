// SPDX-License-Identifier: MPL-2.0
pub mod lettering;
pub mod manuscript;
pub mod scroll_guard;

pub use manuscript::Manuscript;
pub use scroll_guard::scroll_guard;
