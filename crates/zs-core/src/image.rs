use crate::Error;

/// Owned, contiguous 2-D grid. Element `(x, y)` is stored at `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    pub fn as_view_mut(&mut self) -> ImageViewMut<'_, T> {
        ImageViewMut {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &mut self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    /// Panics if `width * height` overflows `usize`.
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        validate_layout(width, height, stride, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn subview(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<ImageView<'a, T>, Error> {
        let start = subview_start(self.dims(), self.stride, x, y, width, height)?;
        let tail = self.data.get(start..).unwrap_or(&[]);
        if tail.len() < min_required_len(width, height, self.stride).ok_or(Error::OutOfBounds)? {
            return Err(Error::OutOfBounds);
        }

        Ok(ImageView {
            width,
            height,
            stride: self.stride,
            data: tail,
        })
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Copies the visible rectangle into a new contiguous image.
    pub fn to_image(&self) -> Image<T> {
        let mut data = Vec::with_capacity(self.width * self.height);
        for row in self.iter_rows() {
            data.extend_from_slice(row);
        }

        Image {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[derive(Debug)]
pub struct ImageViewMut<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a mut [T],
}

impl<'a, T> ImageViewMut<'a, T> {
    pub fn from_slice_mut(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a mut [T],
    ) -> Result<Self, Error> {
        validate_layout(width, height, stride, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.stride + x)
    }

    pub fn subview_mut(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<ImageViewMut<'_, T>, Error> {
        let start = subview_start(self.dims(), self.stride, x, y, width, height)?;
        let min_len = min_required_len(width, height, self.stride).ok_or(Error::OutOfBounds)?;

        let (_, tail) = self.data.split_at_mut(start.min(self.data.len()));
        if tail.len() < min_len {
            return Err(Error::OutOfBounds);
        }

        Ok(ImageViewMut {
            width,
            height,
            stride: self.stride,
            data: tail,
        })
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: self.data,
        }
    }
}

impl<T: Copy> ImageViewMut<'_, T> {
    pub fn fill(&mut self, value: T) {
        for y in 0..self.height {
            self.row_mut(y).fill(value);
        }
    }

    /// Copies `src` into this view. Both must have the same `(width, height)`;
    /// strides may differ.
    pub fn copy_from(&mut self, src: &ImageView<'_, T>) -> Result<(), Error> {
        if src.dims() != self.dims() {
            return Err(Error::DimensionMismatch {
                expected: self.dims(),
                actual: src.dims(),
            });
        }

        for y in 0..self.height {
            self.row_mut(y).copy_from_slice(src.row(y));
        }
        Ok(())
    }
}

fn validate_layout(width: usize, height: usize, stride: usize, len: usize) -> Result<(), Error> {
    if stride < width {
        return Err(Error::InvalidStride);
    }

    let min_len = stride.checked_mul(height).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: len,
    })?;

    if len < min_len {
        return Err(Error::SizeMismatch {
            expected: min_len,
            actual: len,
        });
    }
    Ok(())
}

fn subview_start(
    (parent_w, parent_h): (usize, usize),
    stride: usize,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<usize, Error> {
    if x > parent_w || y > parent_h || width > (parent_w - x) || height > (parent_h - y) {
        return Err(Error::OutOfBounds);
    }

    y.checked_mul(stride)
        .and_then(|v| v.checked_add(x))
        .ok_or(Error::OutOfBounds)
}

fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{Image, ImageView, ImageViewMut};

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Image::from_vec(3, 2, vec![0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn view_indexing_with_stride() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(2, 1), Some(&6));
        assert_eq!(view.get(3, 1), None);
        assert!(!view.is_contiguous());
        assert_eq!(view.to_image().data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn stride_narrower_than_width_is_rejected() {
        let data = vec![0u8; 8];
        assert_eq!(
            ImageView::from_slice(4, 2, 3, &data).unwrap_err(),
            Error::InvalidStride
        );
    }

    #[test]
    fn subview_of_padded_parent() {
        let data = vec![
            0u8, 0, 0, 0, 0, // row 0
            0, 21, 22, 23, 0, // row 1
            0, 31, 32, 33, 0, // row 2
            0, 0, 0, 0, 0, // row 3
        ];
        let parent = ImageView::from_slice(5, 4, 5, &data).expect("valid parent");
        let inner = parent.subview(1, 1, 3, 2).expect("valid subview");

        assert_eq!(inner.dims(), (3, 2));
        assert_eq!(inner.stride(), 5);
        assert_eq!(inner.row(1), &[31, 32, 33]);
        assert!(parent.subview(3, 1, 3, 2).is_err());
    }

    #[test]
    fn empty_subview_at_far_corner_is_valid() {
        let data = vec![7u8; 4];
        let parent = ImageView::from_slice(2, 2, 2, &data).expect("valid parent");
        let sub = parent.subview(2, 2, 0, 0).expect("empty subview");
        assert_eq!(sub.dims(), (0, 0));
    }

    #[test]
    fn fill_and_copy_respect_stride() {
        let mut data = vec![9u8; 10];
        let mut view = ImageViewMut::from_slice_mut(2, 2, 5, &mut data).expect("valid view");
        view.fill(1);

        let src = Image::from_vec(2, 2, vec![4u8, 5, 6, 7]).expect("valid image");
        view.copy_from(&src.as_view()).expect("same shape");
        assert_eq!(data, vec![4, 5, 9, 9, 9, 6, 7, 9, 9, 9]);
    }

    #[test]
    fn copy_from_rejects_other_shape() {
        let mut dst = Image::new_fill(3, 2, 0u8);
        let src = Image::new_fill(2, 3, 1u8);

        let err = dst.as_view_mut().copy_from(&src.as_view()).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: (3, 2),
                actual: (2, 3)
            }
        );
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn subview_mut_writes_into_parent() {
        let mut img = Image::new_fill(4, 3, 0u8);
        {
            let mut parent = img.as_view_mut();
            let mut sub = parent.subview_mut(1, 1, 2, 2).expect("valid subview");
            *sub.get_mut(1, 1).expect("in bounds") = 42;
        }
        assert_eq!(img.as_view().get(2, 2), Some(&42));
    }
}
