//! # Type Naming Module / 类型命名模块
//!
//! Renders readable type names for default report titles.
//! `std::any::type_name` yields fully qualified paths such as
//! `alloc::vec::Vec<alloc::string::String>`; this module strips the module
//! prefixes so the title reads `Vec<String>`.
//!
//! 为默认报告标题渲染可读的类型名。

use std::any::type_name;

/// Returns the type name of `T` with every module path prefix removed.
///
/// # Examples / 示例
/// ```
/// use challenge_tester::infra::naming::short_type_name;
///
/// assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(short_type_name::<(i32, Option<u8>)>(), "(i32, Option<u8>)");
/// ```
pub fn short_type_name<T: ?Sized>() -> String {
    strip_module_paths(type_name::<T>())
}

/// Builds the default title `"<Input> -> <Output>"` for a solution signature.
/// 为解函数签名构建默认标题 `"<输入> -> <输出>"`。
pub fn signature_title<I: ?Sized, O: ?Sized>() -> String {
    format!("{} -> {}", short_type_name::<I>(), short_type_name::<O>())
}

/// Removes `a::b::` prefixes from every path segment in a rendered type name.
pub fn strip_module_paths(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            push_last_segment(&mut short, &segment);
            segment.clear();
            short.push(c);
        }
    }
    push_last_segment(&mut short, &segment);

    short
}

fn push_last_segment(out: &mut String, path: &str) {
    match path.rsplit_once("::") {
        Some((_, last)) => out.push_str(last),
        None => out.push_str(path),
    }
}
