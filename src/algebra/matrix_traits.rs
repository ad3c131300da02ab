/// Size and shape queries shared by all matrix types.
pub trait ShapedMatrix {
    /// (rows, columns)
    fn size(&self) -> (usize, usize);
    fn nrows(&self) -> usize {
        self.size().0
    }
    fn ncols(&self) -> usize {
        self.size().1
    }
    fn is_square(&self) -> bool {
        let (m, n) = self.size();
        m == n
    }
}
