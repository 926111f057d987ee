use std::collections::{BTreeMap, HashMap};

/// Current name and price of a food, keyed by food id when resolving items
#[derive(Debug, Clone, PartialEq)]
pub struct PricedFood{
    pub name: String,
    pub price: f64
}

/// Items of an order item after food ids were resolved: food name -> quantity
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItems{
    pub items: BTreeMap<String, i32>,
    pub total_price: f64
}

// Requested items: food id -> quantity
pub fn check_quantities(items: &BTreeMap<String, i32>) -> Result<(), String>{
    if items.is_empty() {
        return Err("items must contain at least one food".to_string());
    }

    let invalid: Vec<&str> = items.iter()
        .filter(|(_, quantity)| **quantity < 1)
        .map(|(food_id, _)| food_id.as_str())
        .collect();

    if !invalid.is_empty() {
        return Err(format!("Quantity must be at least 1 for: {}", invalid.join(", ")));
    }

    Ok(())
}

/// Ids from `requested` that have no entry in `foods`, in request order
pub fn missing_food_ids(
    requested: &BTreeMap<String, i32>,
    foods: &HashMap<String, PricedFood>
) -> Vec<String>{
    requested.keys()
        .filter(|food_id| !foods.contains_key(*food_id))
        .cloned()
        .collect()
}

pub fn missing_foods_message(missing: &[String]) -> String{
    format!("Food items not found: {}", missing.join(", "))
}

#[derive(Debug, PartialEq)]
pub enum PricingError{
    UnknownFoods(Vec<String>),
    // foods sharing this name add up to more than an i32 quantity
    QuantityOverflow(String)
}

/// Replaces food ids with names and sums `price * quantity`. Foods with the
/// same name are merged into one entry.
/// Fails with every unresolved id rather than the first one.
pub fn price_items(
    requested: &BTreeMap<String, i32>,
    foods: &HashMap<String, PricedFood>
) -> Result<PricedItems, PricingError>{
    let missing = missing_food_ids(requested, foods);
    if !missing.is_empty() {
        return Err(PricingError::UnknownFoods(missing));
    }

    let mut items: BTreeMap<String, i32> = BTreeMap::new();
    let mut total_price = 0.0;

    for (food_id, quantity) in requested {
        let food = &foods[food_id];
        let merged = items.entry(food.name.clone()).or_insert(0);
        *merged = merged.checked_add(*quantity)
            .ok_or_else(|| PricingError::QuantityOverflow(food.name.clone()))?;
        total_price += food.price * f64::from(*quantity);
    }

    Ok(PricedItems{ items, total_price })
}

/// Applies new quantities to foods already on an order item. Foods not on the
/// item are ignored. Returns the new items with the total moved by
/// `price * (new - old)` for each changed food.
pub fn requantify_items(
    current: &BTreeMap<String, i32>,
    current_total: f64,
    requested: &BTreeMap<String, i32>,
    foods: &HashMap<String, PricedFood>
) -> Result<PricedItems, Vec<String>>{
    let missing = missing_food_ids(requested, foods);
    if !missing.is_empty() {
        return Err(missing);
    }

    let mut items = current.clone();
    let mut total_price = current_total;

    for (food_id, new_quantity) in requested {
        let food = &foods[food_id];
        if let Some(old_quantity) = items.get_mut(&food.name) {
            total_price += food.price * (f64::from(*new_quantity) - f64::from(*old_quantity));
            *old_quantity = *new_quantity;
        }
    }

    Ok(PricedItems{ items, total_price })
}

pub fn items_to_json(items: &BTreeMap<String, i32>) -> serde_json::Value{
    serde_json::Value::Object(
        items.iter()
            .map(|(name, quantity)| (name.clone(), serde_json::Value::from(*quantity)))
            .collect()
    )
}

pub fn items_from_json(value: &serde_json::Value) -> Result<BTreeMap<String, i32>, serde_json::Error>{
    serde_json::from_value(value.clone())
}

/// Invoice total: sum of the totals of every item of the order
pub fn invoice_total(item_totals: &[f64]) -> f64{
    item_totals.iter().sum()
}
