use std::error::Error;

use joinsteps::{Row, Table, Value};

fn owners_table() -> Result<Table, Box<dyn Error>> {
    Ok(Table::new(
        "owners".into(),
        vec!["id".into(), "first_name".into()],
        Some("id".into()),
        vec![
            Row::from_pairs([("id", Value::Int(1)), ("first_name", Value::Text("Brian".into()))]),
            Row::from_pairs([("id", Value::Int(2)), ("first_name", Value::Text("Sam".into()))]),
            Row::from_pairs([("id", Value::Int(3)), ("first_name", Value::Text("Alex".into()))]),
            Row::from_pairs([("id", Value::Int(4)), ("first_name", Value::Text("Kyle".into()))]),
        ],
    )?)
}

fn dogs_table() -> Result<Table, Box<dyn Error>> {
    Ok(Table::new(
        "dogs".into(),
        vec!["name".into(), "owner_id".into()],
        Some("name".into()),
        vec![
            Row::from_pairs([("name", Value::Text("Lu".into())), ("owner_id", Value::Int(1))]),
            Row::from_pairs([("name", Value::Text("Marty".into())), ("owner_id", Value::Int(2))]),
            Row::from_pairs([("name", Value::Text("Murphy".into())), ("owner_id", Value::Int(3))]),
            Row::from_pairs([("name", Value::Text("Ringo".into())), ("owner_id", Value::Int(1))]),
            Row::from_pairs([("name", Value::Text("Doggo".into())), ("owner_id", Value::Int(8))]),
        ],
    )?)
}

fn on_owner_id(owner: &Row, dog: &Row) -> bool {
    owner.get("id") == dog.get("owner_id")
}

/// Walks the four SQL joins over the owners and dogs tables, printing each
/// step the way the joins are usually explained: starting tables, the
/// intermediate cross/inner join, then the padded and sorted result.
fn main() -> Result<(), Box<dyn Error>> {
    let owners = owners_table()?;
    let dogs = dogs_table()?;

    println!("Joins in steps\n");
    println!("Owners:\n{}", owners);
    println!("Dogs:\n{}", dogs);

    println!("== Cross join ==");
    println!("SELECT * FROM owners CROSS JOIN dogs;\n");
    let crossed = owners.cross_join(&dogs);
    println!(
        "Each of the {} owner rows combined with each of the {} dog rows:\n{}",
        owners.row_count(),
        dogs.row_count(),
        crossed
    );

    println!("== Inner join ==");
    println!("SELECT * FROM owners INNER JOIN dogs ON owners.id = dogs.owner_id;\n");
    let inner = owners.inner_join(&dogs, on_owner_id);
    println!(
        "The cross join filtered down to the {} pairs satisfying the ON condition:\n{}",
        inner.row_count(),
        inner
    );

    println!("== Left outer join ==");
    println!("SELECT * FROM owners LEFT OUTER JOIN dogs ON owners.id = dogs.owner_id;\n");
    let left = owners.left_outer_join(&dogs, on_owner_id)?;
    println!(
        "The inner join plus owners without a dog, padded with NULL and sorted by id:\n{}",
        left
    );

    println!("== Right outer join ==");
    println!("SELECT * FROM owners RIGHT OUTER JOIN dogs ON owners.id = dogs.owner_id;\n");
    let right = owners.right_outer_join(&dogs, on_owner_id)?;
    println!(
        "The inner join plus dogs without an owner, padded with NULL and sorted by name:\n{}",
        right
    );

    Ok(())
}
