//! Drives the full menu loop with scripted input and captured output.

use std::io::Cursor;

use recipe_book::menu;
use recipe_book::session::{Session, SessionState};

/// Run the menu loop over a scripted input, returning the session as it
/// ended up and everything written to the output stream
fn run_menu(script: &str) -> (Session, String) {
    let mut session = Session::new();
    let mut output = Vec::new();
    menu::run(&mut session, Cursor::new(script.to_string()), &mut output)
        .expect("menu loop failed");
    (session, String::from_utf8(output).expect("non-utf8 output"))
}

/// Scenario A: enter Pancakes with 2 cups of flour, scale by 2, reset
#[test]
fn test_enter_scale_and_reset() {
    let script = "1\nPancakes\n1\nFlour\n2\ncups\n1\nMix everything\n\
                  3\n2\n2\n4\n2\n6\n";
    let (session, output) = run_menu(script);

    assert!(output.contains("Recipe scaled successfully."));
    assert!(output.contains("Recipe reset to original values."));

    let scaled = output.find("Flour - 4 cups").expect("scaled quantity not shown");
    let reset = output.find("Flour - 2 cups").expect("reset quantity not shown");
    assert!(scaled < reset);

    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(session.recipe().unwrap().ingredients[0].quantity, 2);
}

/// Scenario B: a quantity entered as 7.9 is truncated to 7, not rounded
#[test]
fn test_decimal_quantity_truncates() {
    let script = "1\nDough\n1\nFlour\n7.9\ncups\n0\n6\n";
    let (session, _) = run_menu(script);

    let flour = &session.recipe().unwrap().ingredients[0];
    assert_eq!(flour.original_quantity, 7);
    assert_eq!(flour.quantity, 7);
}

/// Comma decimals and fractions are accepted for quantities
#[test]
fn test_alternate_quantity_formats() {
    let script = "1\nDough\n2\nMilk\n1,5\ncups\nButter\n1/2\ncups\n0\n6\n";
    let (session, _) = run_menu(script);

    let recipe = session.recipe().unwrap();
    assert_eq!(recipe.ingredients[0].original_quantity, 1);
    assert_eq!(recipe.ingredients[1].original_quantity, 0);
}

/// Scenario C: display, scale, and reset each report the no-recipe
/// condition while nothing is loaded
#[test]
fn test_no_recipe_conditions() {
    let (session, output) = run_menu("2\n3\n4\n6\n");

    assert_eq!(output.matches("NO RECIPE ENTERED YET.").count(), 3);
    // Scale must not even prompt for a factor
    assert!(!output.contains("Enter scaling factor"));
    assert_eq!(session.state(), SessionState::Empty);
}

/// Scenario D: entering a second recipe discards the first completely
#[test]
fn test_second_recipe_replaces_first() {
    let script = "1\nAlpha\n1\nSalt\n1\ntsp\n0\n\
                  1\nBeta\n1\nPepper\n2\ng\n0\n2\n6\n";
    let (session, output) = run_menu(script);

    let display_start = output.find("Recipe Name: Beta").expect("Beta not displayed");
    let displayed = &output[display_start..];
    assert!(displayed.contains("Pepper - 2 g"));
    assert!(!displayed.contains("Salt"));

    assert_eq!(session.recipe().unwrap().name, "Beta");
    assert_eq!(session.recipe().unwrap().ingredient_count(), 1);
}

/// Scenario E: clear empties the session; the next display reports no
/// recipe
#[test]
fn test_clear_recipe_data() {
    let script = "1\nCake\n0\n0\n5\n2\n6\n";
    let (session, output) = run_menu(script);

    assert!(output.contains("Recipe data cleared."));
    assert!(output.contains("NO RECIPE ENTERED YET."));
    assert_eq!(session.state(), SessionState::Empty);
}

/// Clearing with nothing loaded still reports cleared
#[test]
fn test_clear_when_already_empty() {
    let (session, output) = run_menu("5\n6\n");

    assert!(output.contains("Recipe data cleared."));
    assert_eq!(session.state(), SessionState::Empty);
}

/// Scenario F: a non-numeric menu choice is reported and the menu comes
/// back around with the session untouched
#[test]
fn test_invalid_menu_choice() {
    let (session, output) = run_menu("abc\n6\n");

    assert!(output.contains("INVALID CHOICE. PLEASE ENTER A VALID NUMBER."));
    assert_eq!(
        output.matches("Welcome To Your Recipe Application").count(),
        2
    );
    assert_eq!(session.state(), SessionState::Empty);
}

/// An out-of-range numeric choice is reported the same way
#[test]
fn test_unrecognized_menu_choice() {
    let (session, output) = run_menu("9\n6\n");

    assert!(output.contains("INVALID CHOICE. PLEASE ENTER A VALID NUMBER."));
    assert_eq!(session.state(), SessionState::Empty);
}

/// A bad ingredient count aborts entry but leaves the (empty) new recipe
/// installed
#[test]
fn test_bad_ingredient_count_keeps_new_recipe() {
    let (session, output) = run_menu("1\nBread\nnope\n6\n");

    assert!(output.contains("INVALID INPUT. PLEASE ENTER A VALID NUMBER."));
    let recipe = session.recipe().expect("new recipe should stay installed");
    assert_eq!(recipe.name, "Bread");
    assert_eq!(recipe.ingredient_count(), 0);
}

/// A bad quantity partway through aborts entry; ingredients appended
/// before the failure stay attached to the loaded recipe
#[test]
fn test_bad_quantity_keeps_partial_recipe() {
    let script = "1\nCake\n2\nFlour\n2\ncups\nSugar\noops\n6\n";
    let (session, output) = run_menu(script);

    assert!(output.contains("INVALID INPUT. PLEASE ENTER A VALID NUMBER."));
    let recipe = session.recipe().expect("partial recipe should stay installed");
    assert_eq!(recipe.name, "Cake");
    assert_eq!(recipe.ingredient_count(), 1);
    assert_eq!(recipe.ingredients[0].name, "Flour");
    assert_eq!(recipe.step_count(), 0);
}

/// A bad step count aborts entry after the ingredients were collected
#[test]
fn test_bad_step_count_keeps_ingredients() {
    let script = "1\nTea\n1\nWater\n250\nml\nx\n6\n";
    let (session, output) = run_menu(script);

    assert!(output.contains("INVALID INPUT. PLEASE ENTER A VALID NUMBER."));
    let recipe = session.recipe().unwrap();
    assert_eq!(recipe.ingredient_count(), 1);
    assert_eq!(recipe.step_count(), 0);
}

/// A bad scale factor is reported and the quantities are left alone
#[test]
fn test_bad_scale_factor() {
    let script = "1\nTest\n1\nSalt\n5\ng\n0\n3\nlots\n6\n";
    let (session, output) = run_menu(script);

    assert!(output.contains("INVALID INPUT. PLEASE ENTER A VALID NUMBER."));
    assert!(!output.contains("Recipe scaled successfully."));
    assert_eq!(session.recipe().unwrap().ingredients[0].quantity, 5);
}

/// Fractional scale factors work and truncate toward zero
#[test]
fn test_fraction_scale_factor() {
    let script = "1\nTest\n1\nSalt\n5\ng\n0\n3\n1/2\n2\n6\n";
    let (session, output) = run_menu(script);

    assert!(output.contains("Salt - 2 g"));
    assert_eq!(session.recipe().unwrap().ingredients[0].quantity, 2);
}

/// Choosing Exit prints the farewell and stops the loop
#[test]
fn test_exit() {
    let (_, output) = run_menu("6\n");

    assert!(output.contains("THANK YOU FOR USING THIS APPLICATION"));
    assert_eq!(
        output.matches("Welcome To Your Recipe Application").count(),
        1
    );
}

/// End of input terminates the loop cleanly, without the farewell
#[test]
fn test_eof_ends_loop() {
    let (session, output) = run_menu("");

    assert!(!output.contains("THANK YOU FOR USING THIS APPLICATION"));
    assert_eq!(
        output.matches("Welcome To Your Recipe Application").count(),
        1
    );
    assert_eq!(session.state(), SessionState::Empty);
}
