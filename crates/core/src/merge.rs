use crate::types::Declaration;
use indexmap::IndexMap;

/// 规范化处理函数返回的声明列表
///
/// 同一属性出现多次时保留最后一次的值，
/// 输出顺序为属性首次出现的顺序（与 JS 对象字面量的语义一致）。
pub fn merge_declarations(decls: Vec<Declaration>) -> Vec<Declaration> {
    if decls.len() < 2 {
        return decls;
    }

    let mut map: IndexMap<String, String> = IndexMap::with_capacity(decls.len());
    for decl in decls {
        map.insert(decl.property, decl.value);
    }

    map.into_iter()
        .map(|(property, value)| Declaration { property, value })
        .collect()
}
