/// Cut `text` to `max` chars, marking the cut with a trailing "..."
pub fn truncate_end(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{}...", kept)
}

/// Cut `text` to `max` chars, keeping the end (for paths)
pub fn truncate_start(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().skip(len - max).collect();
    }
    let kept: String = text.chars().skip(len - (max - 3)).collect();
    format!("...{}", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("beach.png", 20), "beach.png");
        assert_eq!(truncate_end("a-very-long-name.png", 10), "a-very-...");
        assert_eq!(truncate_end("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start("/home/me/pics/a.png", 12), "...ics/a.png");
        assert_eq!(truncate_start("short", 10), "short");
    }

    #[test]
    fn test_multibyte_names() {
        assert_eq!(truncate_end("ñandú-en-el-campo.gif", 8), "ñandú...");
    }
}
