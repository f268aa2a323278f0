use crate::{
    basis::Interval,
    seg_tree::{Merge, MulMod, SegTree},
};


/// `Findings` は積が法で割り切れる最短の連続部分列の長さと, その長さの区間の列挙を表す.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Findings {
    pub(crate) length: usize,
    pub(crate) intervals: Vec<Interval>,
}

/// 積が `modulus` で割り切れる連続部分列のうち最短のものを探し, その長さの区間を
/// 先頭位置の昇順で列挙する. 見つからなければ `None`.
///
/// 木が構築中に見つけた零ブロックの幅を窓幅の候補とし, その幅の窓を 1 つずつ
/// 法 `modulus` で畳み込み直して検証する. 割り切れるかどうかは法を取った積だけで
/// 判定できるため, 窓ごとの再計算は除算なしで済み, 要素に 0 があっても構わない.
pub(crate) fn search(values: &[i64], modulus: i64) -> Option<Findings> {
    let op = MulMod::new(modulus);
    let tree = SegTree::build(op, values);
    let length = tree.min_zero_span()?;

    let intervals = (0..=values.len() - length)
        .filter(|&i| {
            values[i..i + length]
                .iter()
                .fold(op.identity(), |acc, &v| op.combine(acc, op.leaf(v)))
                == 0
        })
        .map(|i| Interval::new(i + 1, i + length))
        .collect();

    Some(Findings { length, intervals })
}
