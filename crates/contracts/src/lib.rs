//! Общие типы витрины ковров: товары, каталог, фильтры и переводы.

pub mod domain;
pub mod enums;
pub mod shared;
