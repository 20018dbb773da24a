pub mod carousel;
pub mod gift;
pub mod lightbox;
