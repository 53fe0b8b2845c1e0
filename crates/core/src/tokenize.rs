use indexmap::IndexSet;

/// 除空白字符之外的 token 分隔符
///
/// 规则作者可能依赖这里的切分边界，不要随意增删。
pub const TOKEN_DELIMITERS: [char; 4] = ['\'', '"', '`', ';'];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || TOKEN_DELIMITERS.contains(&c)
}

/// 将源码切分为去重后的候选 token，保持首次出现的顺序
///
/// 连续分隔符产生的空串会被丢弃。
pub fn tokenize(code: &str) -> IndexSet<&str> {
    code.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_whitespace_and_quotes() {
        let code = r#"<div class="p-4 text-red-300" :class='bg-white'>`gap-2`;m-1</div>"#;
        let tokens: Vec<&str> = tokenize(code).into_iter().collect();
        assert_eq!(
            tokens,
            vec![
                "<div",
                "class=",
                "p-4",
                "text-red-300",
                ":class=",
                "bg-white",
                ">",
                "gap-2",
                "m-1</div>",
            ]
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let tokens: Vec<&str> = tokenize("p-4 m-2\tp-4\nm-2 gap-1").into_iter().collect();
        assert_eq!(tokens, vec!["p-4", "m-2", "gap-1"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t;;''").is_empty());
    }

    #[test]
    fn test_other_punctuation_is_kept() {
        let tokens: Vec<&str> = tokenize("text-red-300/50 p-[3px],").into_iter().collect();
        assert_eq!(tokens, vec!["text-red-300/50", "p-[3px],"]);
    }
}
