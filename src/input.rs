use {
    crate::basis::Problem,
    anyhow::{bail, Result},
    std::io::Read,
};

#[cfg(test)]
mod tests;

/// 空白区切りのトークン列 `K N a_1 .. a_N` を読み取る. 改行と空白は区別しない.
pub(crate) fn read_problem(data: impl Read) -> Result<Problem> {
    let mut bytes_iter = data.bytes();

    let mut next_token = || {
        let mut buffer = String::new();

        while let Some(Ok(byte)) = bytes_iter.next() {
            let byte = byte as char;

            // skip leading whitespaces
            if buffer.is_empty() && byte.is_whitespace() {
                continue;
            }

            if byte.is_whitespace() {
                break;
            }

            buffer.push(byte);
        }

        if buffer.is_empty() {
            None
        } else {
            Some(buffer)
        }
    };

    let modulus: i64 = match next_token().map(|s| s.parse()) {
        Some(Ok(k)) => k,
        Some(Err(e)) => bail!("failed to parse modulus: {:?}", e),
        None => bail!("expected modulus, but found none"),
    };
    if modulus < 1 {
        bail!("modulus must be at least 1, but was {}", modulus);
    }

    let count: usize = match next_token().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => bail!("failed to parse element count: {:?}", e),
        None => bail!("expected element count, but found none"),
    };
    if count == 0 {
        bail!("element count must be at least 1");
    }

    let mut values = Vec::with_capacity(count);
    for read in 0..count {
        match next_token().map(|s| s.parse()) {
            Some(Ok(v)) => values.push(v),
            Some(Err(e)) => bail!("failed to parse element {}: {:?}", read + 1, e),
            None => bail!("expected {} elements, but found only {}", count, read),
        }
    }

    Ok(Problem { modulus, values })
}
