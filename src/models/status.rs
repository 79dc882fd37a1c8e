use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MealStatus {
    Served,
    Missed,
    Pending,
}

impl MealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealStatus::Served => "Served",
            MealStatus::Missed => "Missed",
            MealStatus::Pending => "Pending",
        }
    }

    pub fn is_served(&self) -> bool {
        matches!(self, MealStatus::Served)
    }

    pub fn is_missed(&self) -> bool {
        matches!(self, MealStatus::Missed)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, MealStatus::Pending)
    }
}
