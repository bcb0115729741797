/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.

## Purpose
Used with `NEXT` to repeat statements while iterating over a sequence
of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 is assigned to variable I. Statements
execute until a `NEXT`. Each `NEXT` adds 2 to I and runs the body
again until I passes 7. A negative `STEP` counts down, and the bound
test follows the direction of the step.

The first iteration always executes, even when the start is already
past the end.

## Example
```text
10 FOR I = 3 TO 0
20 PRINT I
30 NEXT I
RUN
3
```

*/
