/// `BIGSERIAL` の ID を包む newtype を定義する
///
/// 値はデータベースが採番するので、生成手段は `new`（既存値からの復元）だけ。
/// JSON 上は素の数値として現れる。
///
/// ```rust
/// use challengehub_domain::program::ProgramId;
///
/// let id = ProgramId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "42");
/// ```
macro_rules! define_serial_id {
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
      $vis struct $Name(i64);

      impl $Name {
         pub fn new(value: i64) -> Self {
            Self(value)
         }

         pub fn value(&self) -> i64 {
            self.0
         }
      }
   };
}

/// 前後の空白を落とし、空と長さ超過を拒否する文字列 newtype を定義する
///
/// `label` はエラーメッセージ中のフィールド名。長さは文字数で数える。
macro_rules! define_validated_string {
   (
      $(#[$meta:meta])*
      $vis:vis struct $Name:ident {
         label: $label:expr,
         max_length: $max_length:expr $(,)?
      }
   ) => {
      $(#[$meta])*
      #[derive(
         Debug, Clone, PartialEq, Eq,
         serde::Serialize, serde::Deserialize,
      )]
      $vis struct $Name(String);

      impl $Name {
         /// 最大文字数
         pub const MAX_LENGTH: usize = $max_length;

         pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
            let value = value.into().trim().to_string();

            if value.is_empty() {
               return Err($crate::DomainError::Validation(format!(
                  "{} は必須です",
                  $label
               )));
            }

            if value.chars().count() > $max_length {
               return Err($crate::DomainError::Validation(format!(
                  "{} は {} 文字以内である必要があります",
                  $label, $max_length
               )));
            }

            Ok(Self(value))
         }

         pub fn as_str(&self) -> &str {
            &self.0
         }
      }

      impl std::fmt::Display for $Name {
         fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
         }
      }
   };
}
