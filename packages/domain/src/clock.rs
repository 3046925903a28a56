//! # 時刻プロバイダ
//!
//! レコードの `created_at` / `updated_at` はユースケースが [`Clock`] から
//! 取得した時刻で埋める。本番では [`SystemClock`]、テストでは
//! [`FixedClock`] を注入する。

use chrono::{DateTime, SubsecRound, Utc};

pub trait Clock: Send + Sync {
   /// 現在時刻（UTC）
   fn now(&self) -> DateTime<Utc>;
}

/// OS の時計を読む
///
/// PostgreSQL の `TIMESTAMPTZ` に合わせてマイクロ秒で切り捨てる。
/// 作成・更新のレスポンスと、その後の取得結果が一致する。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now().trunc_subsecs(6)
   }
}

/// 常に同じ時刻を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self(now)
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.0
   }
}

#[cfg(test)]
mod tests {
   use std::sync::Arc;

   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_system_clockは呼び出しの前後の間の時刻を返す() {
      let before = Utc::now().trunc_subsecs(6);
      let now = SystemClock.now();

      assert!(before <= now && now <= Utc::now());
   }

   #[test]
   fn test_system_clockはマイクロ秒より細かい桁を持たない() {
      for _ in 0..100 {
         let now = SystemClock.now();

         assert_eq!(now.timestamp_subsec_nanos() % 1_000, 0, "{now:?}");
      }
   }

   #[test]
   fn test_fixed_clockはトレイトオブジェクト越しでも同じ時刻を返す() {
      let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
      let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(at));

      assert_eq!(clock.now(), at);
      assert_eq!(clock.now().to_rfc3339(), "2023-11-14T22:13:20+00:00");
   }
}
