//! Physical laws of the blocks world.
//!
//! [`legal`] is a pure predicate over object descriptions: may object `a`
//! enter `relation` with object `b`? It is evaluated independently of world
//! position, both at interpretation time (to prune unsatisfiable goals) and
//! at drop time (to gate the `d` action).
//!
//! The rules are checked in a fixed order; the first rule that fires names
//! the violation. The identity check (rule 3) runs before the size rules, so
//! "cannot relate an object to itself" wins over "too large / too small" in
//! error text.

use thiserror::Error;

use crate::ontology::{Form, ObjectSpec, Relation, Size};

/// A violated physical law, rendered as a short human-readable sentence.
///
/// Violations are collected per object pair during interpretation and only
/// surfaced when no legal pair exists, de-duplicated by message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    #[error("I cannot take the floor")]
    TakeFloor,

    #[error("nothing can be {} the floor", relation.phrase())]
    FloorTarget { relation: Relation },

    #[error("an object cannot be {} itself", relation.phrase())]
    Identity { relation: Relation },

    #[error("a ball can only rest on the floor or inside a box")]
    BallRollsOff,

    #[error("a ball cannot support anything")]
    BallSupports,

    #[error("nothing can rest on a ball")]
    OnBall,

    #[error("a {form} has no interior")]
    NoInterior { form: Form },

    #[error("things go inside a box, not on top of it")]
    OntopOfBox,

    #[error("a {size} {form} does not fit inside a {size} box")]
    TooBulky { form: Form, size: Size },

    #[error("a {a_size} box cannot balance on a {b_size} {b_form}")]
    UnstableBox {
        a_size: Size,
        b_size: Size,
        b_form: Form,
    },

    #[error("a large object cannot be {} a small one", relation.phrase())]
    LargeOnSmall { relation: Relation },
}

/// Result of a physics check.
pub type PhysicsResult = Result<(), Violation>;

/// May `a` enter `relation` with `b`?
///
/// Takes ids alongside descriptions because the identity rule compares ids,
/// not descriptions (two distinct objects may share a description).
pub fn legal(
    relation: Relation,
    a_id: &str,
    a: &ObjectSpec,
    b_id: &str,
    b: &ObjectSpec,
) -> PhysicsResult {
    use Relation::*;

    // 1. The floor is not an object; it cannot be moved or related to anything.
    if a.form == Form::Floor {
        return Err(Violation::TakeFloor);
    }

    // 2. Only ontop/above make sense with the floor as target.
    if b.form == Form::Floor && matches!(relation, Under | Leftof | Rightof | Beside | Inside) {
        return Err(Violation::FloorTarget { relation });
    }

    // 3. Identity.
    if a_id == b_id {
        return Err(Violation::Identity { relation });
    }

    // 4. Balls roll off everything except the floor.
    if a.form == Form::Ball && relation == Ontop && b.form != Form::Floor {
        return Err(Violation::BallRollsOff);
    }

    // 5. Balls support nothing.
    if a.form == Form::Ball && relation == Under {
        return Err(Violation::BallSupports);
    }

    // 6. Nothing rests on a ball.
    if b.form == Form::Ball && matches!(relation, Ontop | Above) {
        return Err(Violation::OnBall);
    }

    // 7. Only boxes have an interior.
    if relation == Inside && b.form != Form::Box {
        return Err(Violation::NoInterior { form: b.form });
    }

    // 8. Box contents go "inside", never "ontop".
    if relation == Ontop && b.form == Form::Box {
        return Err(Violation::OntopOfBox);
    }

    // 9. Pyramids, planks and boxes of the box's own size are too bulky to fit.
    if matches!(a.form, Form::Pyramid | Form::Plank | Form::Box)
        && b.form == Form::Box
        && relation == Inside
        && a.size == b.size
    {
        return Err(Violation::TooBulky {
            form: a.form,
            size: a.size.unwrap_or(Size::Large),
        });
    }

    // 10. Boxes cannot balance on small pyramids/bricks, nor on large pyramids.
    if a.form == Form::Box && relation == Ontop && matches!(b.form, Form::Pyramid | Form::Brick) {
        let both_small = a.size == Some(Size::Small) && b.size == Some(Size::Small);
        let large_pyramid =
            a.size == Some(Size::Large) && b.size == Some(Size::Large) && b.form == Form::Pyramid;
        if both_small || large_pyramid {
            return Err(Violation::UnstableBox {
                a_size: a.size.unwrap_or(Size::Large),
                b_size: b.size.unwrap_or(Size::Large),
                b_form: b.form,
            });
        }
    }

    // 11. A small object cannot support a large one.
    if matches!(relation, Inside | Ontop)
        && a.size == Some(Size::Large)
        && b.size == Some(Size::Small)
    {
        return Err(Violation::LargeOnSmall { relation });
    }

    Ok(())
}
