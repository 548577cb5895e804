use crate::surface::Surface;

pub(crate) mod image;
pub(crate) mod rectangle;

pub use image::{BackgroundImage, ImageId, ImageSource};
pub use rectangle::{LineCap, ProvisionalRect, Rectangle, StrokeStyle};

/// Common trait for everything that can sit in the committed list
pub trait Element {
    /// Paint the element onto the surface
    fn draw(&self, surface: &mut dyn Surface);
}

/// One entry of the committed list. Paint order is list order.
#[derive(Debug, Clone)]
pub enum Item {
    Rectangle(Rectangle),
    Background(BackgroundImage),
}

impl Item {
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Item::Rectangle(rect) => Some(rect),
            Item::Background(_) => None,
        }
    }

    pub fn as_background(&self) -> Option<&BackgroundImage> {
        match self {
            Item::Background(image) => Some(image),
            Item::Rectangle(_) => None,
        }
    }
}

impl Element for Item {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Item::Rectangle(r) => r.draw(surface),
            Item::Background(b) => b.draw(surface),
        }
    }
}

impl From<Rectangle> for Item {
    fn from(rect: Rectangle) -> Self {
        Item::Rectangle(rect)
    }
}

impl From<BackgroundImage> for Item {
    fn from(image: BackgroundImage) -> Self {
        Item::Background(image)
    }
}
