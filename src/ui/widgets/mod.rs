// SPDX-License-Identifier: MPL-2.0
pub mod page_scroll;
pub mod transformed_image;

pub use page_scroll::page_scroll;
pub use transformed_image::TransformedImage;
