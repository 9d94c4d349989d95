/// DB の連番（`SERIAL`）をラップする ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i32` をラップ、JSON 上は素の数値）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)`
/// - `new()`: 既存の値から ID を作成
/// - `as_i32()`: 内部値の取得
///
/// 採番は DB が行うため、ドメイン側で新しい ID を生成する手段は提供しない。
///
/// # 使用例
///
/// ```rust
/// use quizcafe_domain::question::QuestionId;
///
/// let id = QuestionId::new(21);
/// assert_eq!(id.as_i32(), 21);
/// assert_eq!(id.to_string(), "21");
/// ```
macro_rules! define_int_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(i32);

        impl $Name {
            /// 既存の値から ID を作成する
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// 内部の値を取得する
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $Name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}
