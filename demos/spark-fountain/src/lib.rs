use wasm_bindgen::prelude::*;

mod fountain;

spark_web::export_engine!(fountain::config, "spark-fountain");
