// Domain layer: 菜園資料、推薦結果與對外的 port 介面

pub mod model;
pub mod ports;
