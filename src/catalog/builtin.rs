//! Default food-source table: five common foods per tracked nutrient.

/// (nutrient, food, content per 100 g, unit)
pub const BUILTIN_FOOD_SOURCES: &[(&str, &str, f64, &str)] = &[
    ("Energy", "Brown rice (cooked)", 112.0, "kcal/100g"),
    ("Energy", "Chicken breast (cooked)", 165.0, "kcal/100g"),
    ("Energy", "Avocado", 160.0, "kcal/100g"),
    ("Energy", "Whole wheat bread", 247.0, "kcal/100g"),
    ("Energy", "Banana", 89.0, "kcal/100g"),

    ("Protein", "Chicken breast (cooked)", 31.0, "g/100g"),
    ("Protein", "Greek yogurt", 10.0, "g/100g"),
    ("Protein", "Lentils (cooked)", 9.0, "g/100g"),
    ("Protein", "Almonds", 21.0, "g/100g"),
    ("Protein", "Salmon (cooked)", 22.0, "g/100g"),

    ("Fat", "Olive oil", 100.0, "g/100g"),
    ("Fat", "Avocado", 15.0, "g/100g"),
    ("Fat", "Almonds", 49.0, "g/100g"),
    ("Fat", "Salmon (cooked)", 13.0, "g/100g"),
    ("Fat", "Chia seeds", 31.0, "g/100g"),

    ("Carbohydrate (available)", "Brown rice (cooked)", 23.0, "g/100g"),
    ("Carbohydrate (available)", "Banana", 23.0, "g/100g"),
    ("Carbohydrate (available)", "Sweet potato (cooked)", 20.0, "g/100g"),
    ("Carbohydrate (available)", "Whole wheat bread", 41.0, "g/100g"),
    ("Carbohydrate (available)", "Oatmeal (cooked)", 12.0, "g/100g"),

    ("Dietary Fibre", "Chia seeds", 34.0, "g/100g"),
    ("Dietary Fibre", "Lentils (cooked)", 8.0, "g/100g"),
    ("Dietary Fibre", "Almonds", 12.0, "g/100g"),
    ("Dietary Fibre", "Raspberries", 7.0, "g/100g"),
    ("Dietary Fibre", "Broccoli (cooked)", 3.3, "g/100g"),

    ("Calcium", "Greek yogurt", 115.0, "mg/100g"),
    ("Calcium", "Sardines (canned with bones)", 382.0, "mg/100g"),
    ("Calcium", "Kale (cooked)", 150.0, "mg/100g"),
    ("Calcium", "Tofu (firm)", 350.0, "mg/100g"),
    ("Calcium", "Almonds", 269.0, "mg/100g"),

    ("Iron", "Spinach (cooked)", 3.6, "mg/100g"),
    ("Iron", "Lentils (cooked)", 3.3, "mg/100g"),
    ("Iron", "Beef (cooked)", 2.6, "mg/100g"),
    ("Iron", "Pumpkin seeds", 8.8, "mg/100g"),
    ("Iron", "Quinoa (cooked)", 1.5, "mg/100g"),

    ("Zinc", "Oysters (cooked)", 78.6, "mg/100g"),
    ("Zinc", "Beef (cooked)", 6.3, "mg/100g"),
    ("Zinc", "Pumpkin seeds", 7.8, "mg/100g"),
    ("Zinc", "Lentils (cooked)", 1.3, "mg/100g"),
    ("Zinc", "Greek yogurt", 0.7, "mg/100g"),

    ("Magnesium", "Pumpkin seeds", 592.0, "mg/100g"),
    ("Magnesium", "Spinach (cooked)", 87.0, "mg/100g"),
    ("Magnesium", "Almonds", 270.0, "mg/100g"),
    ("Magnesium", "Black beans (cooked)", 70.0, "mg/100g"),
    ("Magnesium", "Avocado", 29.0, "mg/100g"),

    ("Phosphorus", "Salmon (cooked)", 280.0, "mg/100g"),
    ("Phosphorus", "Greek yogurt", 135.0, "mg/100g"),
    ("Phosphorus", "Chicken breast (cooked)", 210.0, "mg/100g"),
    ("Phosphorus", "Lentils (cooked)", 180.0, "mg/100g"),
    ("Phosphorus", "Almonds", 481.0, "mg/100g"),

    ("Potassium", "Sweet potato (cooked)", 475.0, "mg/100g"),
    ("Potassium", "Banana", 358.0, "mg/100g"),
    ("Potassium", "Spinach (cooked)", 466.0, "mg/100g"),
    ("Potassium", "Salmon (cooked)", 360.0, "mg/100g"),
    ("Potassium", "Avocado", 485.0, "mg/100g"),

    ("Thiamin", "Pork (cooked)", 0.7, "mg/100g"),
    ("Thiamin", "Sunflower seeds", 1.5, "mg/100g"),
    ("Thiamin", "Black beans (cooked)", 0.2, "mg/100g"),
    ("Thiamin", "Brown rice (cooked)", 0.1, "mg/100g"),
    ("Thiamin", "Trout (cooked)", 0.1, "mg/100g"),

    ("Riboflavin", "Almonds", 1.1, "mg/100g"),
    ("Riboflavin", "Beef liver (cooked)", 3.0, "mg/100g"),
    ("Riboflavin", "Greek yogurt", 0.3, "mg/100g"),
    ("Riboflavin", "Spinach (cooked)", 0.2, "mg/100g"),
    ("Riboflavin", "Mushrooms (cooked)", 0.3, "mg/100g"),

    ("Vitamin B6", "Chickpeas (cooked)", 0.2, "mg/100g"),
    ("Vitamin B6", "Salmon (cooked)", 0.6, "mg/100g"),
    ("Vitamin B6", "Banana", 0.4, "mg/100g"),
    ("Vitamin B6", "Potato (baked)", 0.3, "mg/100g"),
    ("Vitamin B6", "Chicken breast (cooked)", 0.5, "mg/100g"),

    ("Vitamin A (retinol equivalents)", "Sweet potato (cooked)", 961.0, "μg/100g"),
    ("Vitamin A (retinol equivalents)", "Spinach (cooked)", 524.0, "μg/100g"),
    ("Vitamin A (retinol equivalents)", "Carrots (cooked)", 852.0, "μg/100g"),
    ("Vitamin A (retinol equivalents)", "Kale (cooked)", 681.0, "μg/100g"),
    ("Vitamin A (retinol equivalents)", "Beef liver (cooked)", 9442.0, "μg/100g"),

    ("Vitamin A (retinol activity equivalents)", "Sweet potato (cooked)", 961.0, "μg/100g"),
    ("Vitamin A (retinol activity equivalents)", "Spinach (cooked)", 469.0, "μg/100g"),
    ("Vitamin A (retinol activity equivalents)", "Carrots (cooked)", 852.0, "μg/100g"),
    ("Vitamin A (retinol activity equivalents)", "Kale (cooked)", 681.0, "μg/100g"),
    ("Vitamin A (retinol activity equivalents)", "Beef liver (cooked)", 9442.0, "μg/100g"),

    ("Vitamin C", "Red bell pepper (raw)", 128.0, "mg/100g"),
    ("Vitamin C", "Kiwi", 93.0, "mg/100g"),
    ("Vitamin C", "Broccoli (cooked)", 65.0, "mg/100g"),
    ("Vitamin C", "Strawberries", 59.0, "mg/100g"),
    ("Vitamin C", "Orange", 53.0, "mg/100g"),

    ("Vitamin B12", "Clams (cooked)", 84.1, "μg/100g"),
    ("Vitamin B12", "Salmon (cooked)", 2.8, "μg/100g"),
    ("Vitamin B12", "Beef (cooked)", 2.1, "μg/100g"),
    ("Vitamin B12", "Greek yogurt", 0.5, "μg/100g"),
    ("Vitamin B12", "Eggs", 1.1, "μg/100g"),
];
