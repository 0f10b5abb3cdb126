/// Answers to the logo questions in question order.
pub fn logo_answers_fixture() -> Vec<(&'static str, &'static str)> {
    return vec![
        ("q1", "Acme"),
        ("q2", "minimal"),
        ("q3", "blue, white"),
        ("q4", "leaf"),
        ("q5", "icon+text"),
    ];
}

pub fn reply_fixture() -> &'static str {
    return r#"
Here are three name ideas for your eco fitness app.

**1. LeafLift**
Fresh, light and active.

**2. GreenRep**
Every rep counts, for you and the planet.

**3. Sprout Strong**
Growth you can feel.
"#
    .trim();
}
