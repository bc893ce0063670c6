/// Fixes the second argument of a two-argument function, returning a
/// one-argument function. Handy for adapting binary library functions into
/// the unary visitor shape `coord_each` and `prop_each` consume.
///
/// # Examples
///
/// ```
/// use geometa::curry_outer;
///
/// fn scale(value: f64, factor: f64) -> f64 {
///     value * factor
/// }
///
/// let double = curry_outer(scale, 2.0);
/// assert_eq!(6.0, double(3.0));
/// ```
pub fn curry_outer<A, B, R, F>(f: F, second: B) -> impl Fn(A) -> R
where
    F: Fn(A, B) -> R,
    B: Clone,
{
    move |first| f(first, second.clone())
}
