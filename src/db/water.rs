use crate::db::kv::Kv;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;

const KEY_WATER_INTAKE: &str = "water_intake";
const KEY_WATER_DATE: &str = "water_date";

/// Milliliters in one glass.
pub const GLASS_ML: i64 = 250;

/// Daily glass counter. The count lives next to a date marker; a marker
/// from another day resets the count lazily on the next read.
pub struct WaterIntake {
    kv: Kv,
}

impl WaterIntake {
    pub fn new() -> Result<Self> {
        Ok(Self { kv: Kv::new()? })
    }

    /// Today's count. When the stored marker is not today's date (plain
    /// string comparison), the count resets to zero and the marker is
    /// stamped as a side effect.
    pub fn current(&self) -> i64 {
        let today = Local::now().date_naive().to_string();
        let saved_date: Option<String> = self.kv.get(KEY_WATER_DATE);
        if saved_date.as_deref() != Some(today.as_str()) {
            self.kv.save(KEY_WATER_INTAKE, &0i64);
            self.kv.save(KEY_WATER_DATE, &today);
            return 0;
        }
        self.kv.get(KEY_WATER_INTAKE).unwrap_or(0)
    }

    /// Stores the count and stamps today's date. The stamp is
    /// unconditional: two saves on different sides of midnight without a
    /// read in between hide the day boundary until the next `current`.
    pub fn set(&self, count: i64) -> Result<()> {
        let today = Local::now().date_naive().to_string();
        if !self.kv.save(KEY_WATER_INTAKE, &count) || !self.kv.save(KEY_WATER_DATE, &today) {
            return Err(msg_error_anyhow!(Message::WaterSaveFailed));
        }
        Ok(())
    }

    pub fn add_glass(&self) -> Result<i64> {
        let count = self.current() + 1;
        self.set(count)?;
        Ok(count)
    }

    /// One glass less, never below zero.
    pub fn remove_glass(&self) -> Result<i64> {
        let current = self.current();
        if current == 0 {
            return Ok(0);
        }
        let count = current - 1;
        self.set(count)?;
        Ok(count)
    }

    pub fn reset(&self) -> Result<()> {
        self.set(0)
    }
}
