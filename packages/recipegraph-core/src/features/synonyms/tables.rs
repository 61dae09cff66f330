// Fixed alias tables for rule-based synonym generation
//
// Closed world: the generator reproduces exactly these tables, nothing is
// learned or tokenized. Matching is plain substring containment, so an
// entry can match inside a longer word; that over-matching is part of the
// contract and must not be "fixed" with smarter matching.

/// Cooking method → aliases (cross-language included)
pub const COOKING_METHOD_ALIASES: &[(&str, &[&str])] = &[
    ("红烧", &["braised", "红焖"]),
    ("清蒸", &["steamed", "蒸制"]),
    ("清炒", &["stir-fried", "素炒"]),
    ("爆炒", &["stir-fried", "大火快炒"]),
    ("油炸", &["deep-fried", "炸制"]),
    ("凉拌", &["cold-dressed", "拌"]),
    ("炖", &["stewed", "煲"]),
    ("烤", &["roasted", "烘烤"]),
    ("煎", &["pan-fried", "香煎"]),
];

/// Ingredient → aliases; also the lookup table for ingredient synonyms
pub const INGREDIENT_ALIASES: &[(&str, &[&str])] = &[
    ("茄子", &["eggplant", "矮瓜"]),
    ("土豆", &["马铃薯", "potato", "洋芋"]),
    ("西红柿", &["番茄", "tomato"]),
    ("鸡蛋", &["egg", "鸡子"]),
    ("豆腐", &["tofu", "水豆腐"]),
    ("猪肉", &["pork"]),
    ("牛肉", &["beef"]),
    ("鸡肉", &["chicken"]),
    ("青椒", &["菜椒", "green pepper"]),
    ("大蒜", &["蒜", "garlic"]),
    ("白菜", &["大白菜", "Chinese cabbage"]),
    ("萝卜", &["白萝卜", "radish"]),
];

/// Regional style → aliases
pub const REGIONAL_STYLE_ALIASES: &[(&str, &[&str])] = &[
    ("川味", &["四川风味", "Sichuan-style"]),
    ("粤式", &["广东风味", "Cantonese-style"]),
    ("湘味", &["湖南风味", "Hunan-style"]),
    ("东北", &["关东", "Northeastern-style"]),
    ("家常", &["home-style"]),
];
