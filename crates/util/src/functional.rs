//! Function composition.

/// Composes `fns` left to right: `pipe(vec![f, g])(x) == g(f(x))`.
///
/// ```
/// use shortkit_util::functional::pipe;
///
/// let add_one: Box<dyn Fn(i32) -> i32> = Box::new(|x| x + 1);
/// let times_ten: Box<dyn Fn(i32) -> i32> = Box::new(|x| x * 10);
/// let f = pipe(vec![add_one, times_ten]);
/// assert_eq!(f(2), 30);
/// ```
pub fn pipe<T>(fns: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |x| fns.iter().fold(x, |acc, f| f(acc))
}

/// Composes `fns` right to left: `compose(vec![f, g])(x) == f(g(x))`.
pub fn compose<T>(fns: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |x| fns.iter().rev().fold(x, |acc, f| f(acc))
}
