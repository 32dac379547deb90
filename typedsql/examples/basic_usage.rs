use typedsql::prelude::*;

attribute! {
    Id: i64 = "id";
    Name: String = "name";
    Email: String = "email";
    Age: i32 = "age";
    Active: bool = "active";
}

fn main() -> Result<()> {
    // Projection only
    let all_names = select((Id::COLUMN, Name::COLUMN, Email::COLUMN));
    println!("{}", all_names);

    // Filter built with methods
    let adults = Select::new(Age::COLUMN.equals(18), Name::COLUMN);
    println!("{}", adults);

    // Filter built with & and |
    let active_admins = Select::new(
        (Name::COLUMN.equals("admin") | Name::COLUMN.equals("root")) & Active::COLUMN,
        (Id::COLUMN, Name::COLUMN),
    );
    println!("{}", active_admins);

    // Columns only known at runtime are checked when composed
    let score = DynAttribute::new("score", SqlTypeTag::Double)?;
    if let Err(err) = DynExpr::column(score.clone()).equals(DynExpr::literal("high")) {
        println!("rejected: {}", err);
    }

    let filter = DynExpr::column(score)
        .equals(DynExpr::literal(9.5))?
        .and(Active::COLUMN.into_dyn())?
        .into_condition()?;
    println!("{}", Select::new(filter, Email::COLUMN));

    Ok(())
}
