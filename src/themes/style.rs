/// Provide a per-widget override API.
pub trait Styled {
    type Style: Clone;

    fn styled(self, style: Self::Style) -> Self;

    fn style(&self) -> &Self::Style;
}
