use recipe_analyzer::{classify_message, substitutions, InMemoryKnowledge, MessageType};

#[test]
fn test_cooking_questions_are_routed() {
    let cases = [
        ("How do I make pancakes?", MessageType::RecipeQuestion),
        ("What ingredients go in pesto?", MessageType::RecipeQuestion),
        ("How should I roast vegetables", MessageType::TechniqueQuestion),
        ("Best technique for crispy skin", MessageType::TechniqueQuestion),
        ("Is there an alternative to buttermilk", MessageType::IngredientQuestion),
        ("How to store fresh herbs", MessageType::IngredientQuestion),
        ("Can leftovers cause food poisoning", MessageType::SafetyQuestion),
        ("Tell me something fun", MessageType::GeneralCooking),
    ];

    for (message, expected) in cases {
        assert_eq!(classify_message(message), expected, "message: {}", message);
    }
}

#[test]
fn test_routing_ignores_case() {
    assert_eq!(
        classify_message("RECIPE FOR LASAGNA"),
        classify_message("recipe for lasagna")
    );
}

#[test]
fn test_substitutions_fall_back_to_keywords() {
    let knowledge = InMemoryKnowledge::basic();

    assert_eq!(
        substitutions("eggs", &knowledge).unwrap(),
        vec!["flax eggs", "chia eggs", "banana"]
    );
    assert_eq!(
        substitutions("Oat Milk", &knowledge).unwrap(),
        vec!["almond milk", "soy milk", "oat milk", "coconut milk"]
    );
    assert_eq!(
        substitutions("truffle", &knowledge).unwrap(),
        vec!["Check with a cooking expert", "Research online", "Try similar ingredients"]
    );
}
