//! 有序模式匹配原语
//! 软件/OS/设备三张模式表共用的线性首中扫描

use crate::compiler::PatternTable;

/// 有序模式匹配器
pub struct PatternMatcher;

impl PatternMatcher {
    /// 按声明顺序扫描模式表，返回首个命中条目的ID
    ///
    /// # 参数
    /// - `ua`: 待识别的 User-Agent 字符串
    /// - `table`: 有序模式表（顺序即优先级，多条命中时最早声明者生效）
    /// - `with_version`: 是否同时提取版本（首个捕获组的匹配文本）
    ///
    /// # 返回值
    /// - `(Some(id), version)`: 命中；`with_version` 为否、模式无捕获组、
    ///   或捕获组未参与匹配时 `version` 为空字符串
    /// - `(None, "")`: 全表无命中（合法结果，非错误）
    pub fn find_first(ua: &str, table: &PatternTable, with_version: bool) -> (Option<u32>, String) {
        for entry in table {
            if !entry.regex.is_match(ua) {
                continue;
            }

            let mut version = String::new();
            if with_version {
                if let Some(captures) = entry.regex.captures(ua) {
                    if let Some(matched) = captures.get(1) {
                        version = matched.as_str().to_string();
                    }
                }
            }

            return (Some(entry.id), version);
        }

        (None, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::CompiledPattern;
    use regex::RegexBuilder;

    fn table(entries: &[(u32, &str)]) -> PatternTable {
        entries
            .iter()
            .map(|(id, pattern)| CompiledPattern {
                id: *id,
                regex: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_first_match_wins_in_declared_order() {
        // 测试场景：两条模式都命中时，最早声明者生效；调换顺序结果翻转
        let ua = "Mozilla/5.0 Chrome/49.0 Safari/537.36";

        let forward = table(&[(1, "chrome"), (2, "safari")]);
        assert_eq!(PatternMatcher::find_first(ua, &forward, false).0, Some(1));

        let reversed = table(&[(2, "safari"), (1, "chrome")]);
        assert_eq!(PatternMatcher::find_first(ua, &reversed, false).0, Some(2));
    }

    #[test]
    fn test_version_captured_from_matching_pattern() {
        // 测试场景：版本来自命中模式自身的首个捕获组
        let patterns = table(&[(1, r"chrome/([0-9.]+)")]);
        let (id, version) = PatternMatcher::find_first("Chrome/49.0.2575.0", &patterns, true);
        assert_eq!(id, Some(1));
        assert_eq!(version, "49.0.2575.0");
    }

    #[test]
    fn test_match_without_capture_group_yields_empty_version() {
        // 测试场景：模式无捕获组，命中但版本为空
        let patterns = table(&[(3, "mobile safari")]);
        let (id, version) = PatternMatcher::find_first("iPhone Mobile Safari", &patterns, true);
        assert_eq!(id, Some(3));
        assert_eq!(version, "");
    }

    #[test]
    fn test_non_participating_group_yields_empty_version() {
        // 测试场景：捕获组存在但未参与匹配，版本为空
        let patterns = table(&[(4, r"wget(?:/([0-9.]+))?")]);
        let (id, version) = PatternMatcher::find_first("Wget", &patterns, true);
        assert_eq!(id, Some(4));
        assert_eq!(version, "");
    }

    #[test]
    fn test_version_skipped_when_not_requested() {
        // 测试场景：未请求版本捕获时不提取
        let patterns = table(&[(1, r"chrome/([0-9.]+)")]);
        let (id, version) = PatternMatcher::find_first("Chrome/49.0", &patterns, false);
        assert_eq!(id, Some(1));
        assert_eq!(version, "");
    }

    #[test]
    fn test_no_match_returns_none() {
        // 测试场景：全表无命中
        let patterns = table(&[(1, "chrome"), (2, "safari")]);
        let (id, version) = PatternMatcher::find_first("curl/7.88", &patterns, true);
        assert_eq!(id, None);
        assert_eq!(version, "");

        // 空表同理
        let (id, _) = PatternMatcher::find_first("anything", &PatternTable::new(), true);
        assert_eq!(id, None);
    }
}
