use crate::divisible::Findings;

#[cfg(test)]
mod tests;

/// 探索結果を出力文字列へ変換する. 見つからなければ `NONE` 1 行,
/// 見つかれば最短の長さと 1 始まり閉区間の列を昇順で並べる.
pub(crate) fn render(findings: &Option<Findings>) -> String {
    let findings = match findings {
        Some(findings) => findings,
        None => return "NONE\n".to_owned(),
    };

    let mut result = String::new();

    result += &format!("Minimum interval length: {}\n", findings.length);
    result += "Found intervals:\n";

    for interval in &findings.intervals {
        result += &format!("[{}, {}]\n", interval.first, interval.last);
    }

    result
}
