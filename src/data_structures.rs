use crate::{
    objects::{assert_len, Object},
    PdfResult, Resolve,
};

/// Rectangles are used to describe locations on a page and bounding boxes
/// for a variety of objects. A rectangle shall be written as an array of
/// four numbers giving the coordinates of a pair of diagonally opposite
/// corners
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub lower_left_x: f32,
    pub lower_left_y: f32,
    pub upper_right_x: f32,
    pub upper_right_y: f32,
}

impl Rectangle {
    pub fn from_arr(mut arr: Vec<Object>, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        assert_len(&arr, 4)?;

        let upper_right_y = resolver.assert_number(arr.pop().unwrap())?;
        let upper_right_x = resolver.assert_number(arr.pop().unwrap())?;
        let lower_left_y = resolver.assert_number(arr.pop().unwrap())?;
        let lower_left_x = resolver.assert_number(arr.pop().unwrap())?;

        Ok(Rectangle {
            lower_left_x,
            lower_left_y,
            upper_right_x,
            upper_right_y,
        })
    }

    pub fn width(&self) -> f32 {
        self.upper_right_x - self.lower_left_x
    }

    pub fn height(&self) -> f32 {
        self.upper_right_y - self.lower_left_y
    }
}
