use crate::types::Declaration;

/// 将声明列表序列化为单行 CSS 规则
///
/// `selector` 必须是已经转义过的字符串。
///
/// ```
/// use breeze_core::{css::to_css_block, Declaration};
///
/// let css = to_css_block(".p-4", &[Declaration::new("padding", "1rem")]);
/// assert_eq!(css, ".p-4 { padding: 1rem; }");
/// ```
pub fn to_css_block(selector: &str, declarations: &[Declaration]) -> String {
    let mut css = String::with_capacity(selector.len() + 4 + declarations.len() * 24);
    css.push_str(selector);
    css.push_str(" {");
    for decl in declarations {
        css.push(' ');
        css.push_str(&decl.property);
        css.push_str(": ");
        css.push_str(&decl.value);
        css.push(';');
    }
    css.push_str(" }");
    css
}
