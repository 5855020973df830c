#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub title_en: String,
    pub title_fi: String,
    pub description_en: Option<String>,
    pub description_fi: Option<String>,
    pub cuisine_type: Option<String>,
    pub prep_time_min: Option<u32>,
    pub calories_per_serving: Option<u32>,
    pub protein_per_serving: Option<f64>,
    pub carbs_per_serving: Option<f64>,
    pub fat_per_serving: Option<f64>,
    pub tags: Vec<String>,
    pub source: Option<String>,
}

/// Partial update. An outer `None` leaves the field alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
    pub title_en: Option<String>,
    pub title_fi: Option<String>,
    pub description_en: Option<Option<String>>,
    pub description_fi: Option<Option<String>>,
    pub cuisine_type: Option<Option<String>>,
    pub prep_time_min: Option<Option<u32>>,
    pub calories_per_serving: Option<Option<u32>>,
    pub protein_per_serving: Option<Option<f64>>,
    pub carbs_per_serving: Option<Option<f64>>,
    pub fat_per_serving: Option<Option<f64>>,
    pub tags: Option<Vec<String>>,
    pub source: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct ListRecipesInput {
    pub page: u32,
    pub limit: u32,
    /// Exact match.
    pub cuisine_type: Option<String>,
}

impl Default for ListRecipesInput {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            cuisine_type: None,
        }
    }
}
