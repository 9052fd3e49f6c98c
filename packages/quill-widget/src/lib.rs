#![deny(warnings)]
pub use assets::{
    Asset, AssetBundle, AssetError, HighlightAsset, HighlightLocalAsset, KatexAsset,
    KatexLocalAsset, QuillAsset, QuillLocalAsset, SmartBreakLocalAsset,
};
pub use view::View;
pub use widget::{Quill, WidgetError};

pub use quill_core;

pub mod assets;
pub mod html;
pub mod view;
pub mod widget;
