
/// `Node` はセグメント木の 1 ノード. 覆っている区間の集約値 `value` と, その区間に含まれる元の配列の要素数 `span` を持つ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) span: usize,
}

/// `Merge` は隣り合う 2 ノードを 1 ノードへ畳み込む演算を表す. 実装は以下を満たさなければならない.
/// ```rs
/// fn test<M: Merge>(op: M, a: Node, b: Node, c: Node) {
///     op.merge(a, op.identity_node()) == a;
///     op.merge(op.identity_node(), a) == a;
///     op.merge(op.merge(a, b), c) == op.merge(a, op.merge(b, c));
/// }
/// ```
pub(crate) trait Merge: Clone + Copy {
    /// 単位元の値.
    fn identity(&self) -> i64;

    /// 値同士の結合.
    fn combine(&self, a: i64, b: i64) -> i64;

    /// 元の配列の要素から葉の値への変換.
    fn leaf(&self, raw: i64) -> i64 {
        raw
    }

    /// 吸収元. `combine` の結果がこの値になると以降どう結合しても戻らない.
    fn absorbing(&self) -> Option<i64> {
        None
    }

    /// 範囲外の子の代わりに使う単位元ノード.
    fn identity_node(&self) -> Node {
        Node {
            value: self.identity(),
            span: 0,
        }
    }

    fn merge(&self, a: Node, b: Node) -> Node {
        Node {
            value: self.combine(a.value, b.value),
            span: a.span + b.span,
        }
    }
}

/// 区間和を計算する `Merge`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Add;

impl Merge for Add {
    fn identity(&self) -> i64 {
        0
    }

    fn combine(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

/// 法 `modulus` での区間積を計算する `Merge`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MulMod {
    modulus: i64,
}

impl MulMod {
    pub(crate) fn new(modulus: i64) -> Self {
        debug_assert!(1 <= modulus);
        Self { modulus }
    }
}

impl Merge for MulMod {
    fn identity(&self) -> i64 {
        1 % self.modulus
    }

    fn combine(&self, a: i64, b: i64) -> i64 {
        (a as i128 * b as i128).rem_euclid(self.modulus as i128) as i64
    }

    fn leaf(&self, raw: i64) -> i64 {
        raw.rem_euclid(self.modulus)
    }

    fn absorbing(&self) -> Option<i64> {
        Some(0)
    }
}

/// セグメント木, N 要素の配列に対して区間の集約値の計算と値の加算を以下の計算量で行う. 遅延伝播なし.
/// 構築: O(N), クエリ: O(log N), 更新: O(区間幅 + log N).
///
/// 各ノードの担当区間は格納せず, 完全二分ヒープ配置 (根 = 0, 子 = 2i+1, 2i+2) と
/// 構築時の区間二分から都度計算する.
#[derive(Debug)]
pub(crate) struct SegTree<M> {
    vec: Vec<Node>,
    op: M,
    len: usize,
    zero_span: Option<usize>,
}

impl<M: Merge> SegTree<M> {
    /// `values` 全体を葉として木を構築する. 空の配列も受け付け, その場合すべてのクエリは単位元を返す.
    pub(crate) fn build(op: M, values: &[i64]) -> Self {
        let size = values.len().next_power_of_two();
        let mut tree = Self {
            vec: vec![op.identity_node(); size * 2 - 1],
            op,
            len: values.len(),
            zero_span: None,
        };
        if !values.is_empty() {
            tree.build_sub(values, 0, 0, values.len() - 1);
        }
        tree
    }

    fn build_sub(&mut self, values: &[i64], index: usize, lo: usize, hi: usize) {
        if lo > hi {
            return;
        }

        if lo == hi {
            // 葉
            self.vec[index] = Node {
                value: self.op.leaf(values[lo]),
                span: 1,
            };
            self.note_zero(self.vec[index]);
            return;
        }

        let mid = (lo + hi) / 2;
        self.build_sub(values, index * 2 + 1, lo, mid);
        self.build_sub(values, index * 2 + 2, mid + 1, hi);

        self.vec[index] = self.op.merge(self.vec[index * 2 + 1], self.vec[index * 2 + 2]);
        self.note_zero(self.vec[index]);
    }

    /// 吸収元へ到達したノードの幅を記録する. 途中の結合は最初の記録を上書きしないが,
    /// 幅 1 の零はそれより短い区間が存在しないため, 既に幅の広いブロックを記録した後でも常に勝つ.
    fn note_zero(&mut self, node: Node) {
        if self.op.absorbing() != Some(node.value) {
            return;
        }

        if node.span == 1 {
            self.zero_span = Some(1);
        } else if self.zero_span.is_none() {
            self.zero_span = Some(node.span);
        }
    }

    /// 区間 `[start, end]` の集約値を求める. 範囲外の部分は単位元として扱うため,
    /// 完全に範囲外の区間に対しては単位元ノードを返す. 返り値の `span` は区間内に
    /// 実在した要素数になる.
    pub(crate) fn query(&self, start: usize, end: usize) -> Node {
        if self.len == 0 {
            return self.op.identity_node();
        }
        self.query_sub(0, 0, self.len - 1, start, end)
    }

    fn query_sub(&self, index: usize, lo: usize, hi: usize, start: usize, end: usize) -> Node {
        if start > hi || end < lo {
            // 担当区間が要求区間と交わらない場合
            self.op.identity_node()
        } else if start <= lo && hi <= end {
            // 担当区間が要求区間に完全に含まれる場合
            self.vec[index]
        } else {
            let mid = (lo + hi) / 2;
            self.op.merge(
                self.query_sub(index * 2 + 1, lo, mid, start, end),
                self.query_sub(index * 2 + 2, mid + 1, hi, start, end),
            )
        }
    }

    /// 区間 `[start, end]` の各要素へ `delta` を加算する. 葉は生の値のまま加算し,
    /// 法の適用は親の再結合に任せる. 区間内の葉を 1 つずつ触るため O(区間幅).
    /// 範囲外の部分は無視する. `zero_span` は構築時の値のまま変わらない.
    pub(crate) fn update(&mut self, start: usize, end: usize, delta: i64) {
        if self.len == 0 {
            return;
        }
        self.update_sub(0, 0, self.len - 1, start, end, delta);
    }

    fn update_sub(
        &mut self,
        index: usize,
        lo: usize,
        hi: usize,
        start: usize,
        end: usize,
        delta: i64,
    ) {
        if start > hi || end < lo || start > end {
            // 範囲外
            return;
        }

        if lo == hi {
            self.vec[index].value += delta;
            return;
        }

        let mid = (lo + hi) / 2;
        self.update_sub(index * 2 + 1, lo, mid, start, end, delta);
        self.update_sub(index * 2 + 2, mid + 1, hi, start, end, delta);

        self.vec[index] = self.op.merge(self.vec[index * 2 + 1], self.vec[index * 2 + 2]);
    }

    /// 構築中に集約値が吸収元になったノードの幅. 零の葉があれば幅 1, なければ
    /// 最初に零へ到達した結合の幅で, この木の二分割に沿ったブロックの中での最短候補になる.
    /// 任意の位置の区間まで含めた真の最短とは限らないので, 呼び出し側が検証すること.
    pub(crate) fn min_zero_span(&self) -> Option<usize> {
        self.zero_span
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
