use reflectscope_api::ReflectiveClass;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(ReflectiveClass);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
