/*!
# `[LET] <variable> = <expression>`

## Purpose
Assign a value to a scalar or an array element.

## Remarks
The word `LET` is optional: `A = 5` and `LET A = 5` are the same
statement. Variable names keep their first two characters; a trailing
`$` makes a distinct string variable, so `A` and `A$` coexist.
Assigning a number to a string variable, or the reverse, is TYPE
MISMATCH and leaves the variable as it was. Strings hold at most 255
characters; anything longer is cut off silently.

*/
